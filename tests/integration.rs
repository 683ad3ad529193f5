// SPDX-License-Identifier: MIT
//! Cross-implementation vectors and end-to-end properties.
//!
//! The digests below are the off-chain reference outputs for the same
//! inputs; they pin the tables, the round schedule, and the boundary
//! policies all at once. Values are written in canonical decimal, as the
//! reference prints them.

use poseidon_bls12381::{
    hash, hash_1, hash_2, hash_2_u256, hash_4, mds, permutation, Felt, Poseidon2, PoseidonError,
    MODULUS_LIMBS,
};

/// p - 1, the largest canonical element.
fn p_minus_1() -> Felt {
    -Felt::ONE
}

/// floor(p / 2).
fn p_half() -> Felt {
    Felt::from_u256_le([
        0x7fff_ffff_8000_0000,
        0xa9de_d201_7fff_2dff,
        0x199c_ec04_04d0_ec02,
        0x39f6_d3a9_94ce_bea4,
    ])
}

#[test]
fn hash_4_reference_vectors() {
    let zero = Felt::ZERO;
    assert_eq!(
        hash_4(zero, zero, zero, zero).to_string(),
        "13414013329667544728247370350271255543326139971590598177275881238397992759743"
    );
    assert_eq!(
        hash_4(
            Felt::from(1u64),
            Felt::from(2u64),
            Felt::from(3u64),
            Felt::from(4u64)
        )
        .to_string(),
        "21145329782224435656281698581333264404190182101555512590871803982657985796198"
    );
}

#[test]
fn hash_4_extended_vectors() {
    assert_eq!(
        hash_4(
            Felt::from(123u64),
            Felt::from(456u64),
            Felt::from(789u64),
            Felt::from(101112u64)
        )
        .to_string(),
        "2961043210948921036705143845074294525317436046909118360899673960778402575172"
    );
    assert_eq!(
        hash_4(
            Felt::from(0xffff_ffff_ffff_ffff_u64),
            Felt::from(0x1234_5678_9abc_def0_u64),
            Felt::from(999u64),
            Felt::from(888u64)
        )
        .to_string(),
        "18601370491694723999668801820162098015691747282480007531967012916311022233700"
    );
    // a set bit in each outer input slot
    assert_eq!(
        hash_4(Felt::ONE, Felt::ZERO, Felt::ZERO, Felt::ZERO).to_string(),
        "10736699654660835511203041344736375322390334653312014440398399568665861486864"
    );
    assert_eq!(
        hash_4(Felt::ZERO, Felt::ZERO, Felt::ZERO, Felt::ONE).to_string(),
        "40503072159107693674535009795865681097893977160879739701591995456477597117069"
    );
}

#[test]
fn hash_2_reference_vectors() {
    assert_eq!(
        hash_2(Felt::ZERO, Felt::ZERO).to_string(),
        "51576823595707970152643159819788304363803754756066229172775779360774743019614"
    );
    assert_eq!(
        hash_2(Felt::from(1u64), Felt::from(2u64)).to_string(),
        "28821147804331559602169231704816259064962739503761913593647409715501647586810"
    );
    assert_eq!(
        hash_2(Felt::from(123u64), Felt::from(456u64)).to_string(),
        "8079747701770448096169933690831733268548278059333184723693943595493728456866"
    );
    assert_eq!(
        hash_2(
            Felt::from(0x1234_5678_90ab_cdef_u64),
            Felt::from(0xfedc_ba09_8765_4321_u64)
        )
        .to_string(),
        "108626615605107254851297978289982009724055849988930254700265613118682503095"
    );
}

#[test]
fn hash_2_boundary_vectors() {
    // p-1, p/2 and 0 probe the reduction edge on every slot
    assert_eq!(
        hash_2(p_minus_1(), Felt::ZERO).to_string(),
        "13451459153536653361510553130257644108045687739609501036166779564320463592304"
    );
    assert_eq!(
        hash_2(Felt::ZERO, p_minus_1()).to_string(),
        "11931062952202734020022834427105421987472777207575496363712940271575442059117"
    );
    assert_eq!(
        hash_2(p_minus_1(), p_minus_1()).to_string(),
        "13749015692973795093326134640289425716893530583220479127948941647063541061741"
    );
    assert_eq!(
        hash_2(p_half(), p_half()).to_string(),
        "21974744771099000400389149603380124028797258807511527226656594715144490400785"
    );
}

#[test]
fn hash_1_and_variable_length_vectors() {
    assert_eq!(
        hash_1(Felt::from(42u64)).to_string(),
        "28745767777391623862997808326270623624681035017877837379778301215693453352110"
    );
    let xs: Vec<Felt> = (1u64..=3).map(Felt::from).collect();
    assert_eq!(
        hash(&xs).to_string(),
        "14182356019515456119262326518817098399387792604706502822094598203172896488689"
    );
    let xs: Vec<Felt> = (1u64..=5).map(Felt::from).collect();
    assert_eq!(
        hash(&xs).to_string(),
        "14440609720680517364870144201125196350235237799835405735001801617412770010454"
    );
}

#[test]
fn raw_permutation_full_state_vectors() {
    let out = permutation(&[Felt::from(1u64), Felt::from(2u64), Felt::from(3u64)]).unwrap();
    let expected = [
        "16216428907948308717668814249336899239002013418500646805357389615840371285048",
        "27832647690155930367435005202097568219299818129248388764248402818083468115196",
        "663091920739273575184272484636162266674459649065415968946479572282550384133",
    ];
    for (slot, want) in out.iter().zip(expected) {
        assert_eq!(slot.to_string(), want);
    }

    let out = permutation(&(1u64..=5).map(Felt::from).collect::<Vec<_>>()).unwrap();
    let expected = [
        "27455574729734964764973945405452606012174917511472283953685437367627685500736",
        "40688114437767309260037842142146992940046331642367569911847954751321668833329",
        "19169083498724163007409260308830921413856234244860045101125652316098411280672",
        "8545566566020926829672078735864310494534735221981305007510254774267478605391",
        "9179138161958614124174385196040556044165313514619231648416770848950700171842",
    ];
    for (slot, want) in out.iter().zip(expected) {
        assert_eq!(slot.to_string(), want);
    }
}

#[test]
fn wrong_arity_is_an_error_not_a_digest() {
    for len in [0usize, 1, 2, 4, 6, 9] {
        let state = vec![Felt::ONE; len];
        assert_eq!(
            permutation(&state).unwrap_err(),
            PoseidonError::InvalidArity { got: len }
        );
    }
}

#[test]
fn digests_are_canonical_and_deterministic() {
    use rand::Rng;
    let mut rng = rand::rng();
    for _ in 0..200 {
        let x = Felt::from(rng.random::<u64>());
        let y = Felt::from(rng.random::<u64>());
        let d = hash_2(x, y);
        assert_eq!(d, hash_2(x, y));
        // canonical encoding decodes strictly, so the digest is in [0, p)
        assert_eq!(Felt::from_bytes_le(&d.to_bytes_le()).unwrap(), d);
    }
}

#[test]
fn oversized_integers_reduce_like_their_residues() {
    let mut over = MODULUS_LIMBS;
    over[0] = over[0].wrapping_add(1);
    // p + 1 and 1 must collide under the implicit-reduction policy
    assert_eq!(
        hash_2_u256(over, [0; 4]),
        hash_2(Felt::ONE, Felt::ZERO).to_u256_le()
    );
    // and near-boundary values stay distinct from their neighbors
    assert_ne!(
        hash_2(p_minus_1(), Felt::ZERO),
        hash_2(Felt::ZERO, Felt::ZERO)
    );
}

/// Both mixing matrices must be invertible. Naive Gaussian elimination
/// over the field; the matrices are tiny.
#[test]
fn mds_matrices_are_invertible() {
    fn assert_invertible<const N: usize>(m: &[[Felt; N]; N]) {
        let mut aug = [[Felt::ZERO; 10]; 5]; // N <= 5, 2N <= 10
        for i in 0..N {
            for j in 0..N {
                aug[i][j] = m[i][j];
            }
            aug[i][N + i] = Felt::ONE;
        }
        for col in 0..N {
            let pivot = (col..N)
                .find(|&r| !aug[r][col].is_zero())
                .expect("singular matrix");
            aug.swap(pivot, col);
            let inv = aug[col][col].invert().unwrap();
            for j in col..2 * N {
                aug[col][j] *= inv;
            }
            for row in 0..N {
                if row != col {
                    let factor = aug[row][col];
                    for j in col..2 * N {
                        let sub = factor * aug[col][j];
                        aug[row][j] -= sub;
                    }
                }
            }
        }
        for i in 0..N {
            for j in 0..N {
                let want = if i == j { Felt::ONE } else { Felt::ZERO };
                assert_eq!(aug[i][j], want);
            }
        }
    }
    assert_invertible(&*mds::M3);
    assert_invertible(&*mds::M5);
}

#[test]
fn distinct_widths_do_not_collide_trivially() {
    let a = hash_2(Felt::from(1u64), Felt::from(2u64));
    let b = hash_4(Felt::from(1u64), Felt::from(2u64), Felt::ZERO, Felt::ZERO);
    assert_ne!(a, b);
}

#[test]
fn permutation_state_ownership_is_per_call() {
    // two interleaved computations over shared tables must not interfere
    let mut s1 = [Felt::from(1u64), Felt::from(2u64), Felt::from(3u64)];
    let mut s2 = s1;
    Poseidon2::apply(&mut s1);
    let once = s1;
    Poseidon2::apply(&mut s1);
    Poseidon2::apply(&mut s2);
    assert_eq!(once, s2);
    assert_ne!(s1, s2);
}
