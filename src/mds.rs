// SPDX-License-Identifier: MIT
//! MDS mixing matrices for both permutation widths.
//!
//! Cauchy matrices over points drawn from the same Grain stream as the
//! round constants (see [`crate::params`]); fixed configuration data with
//! the same compatibility contract as [`crate::constants`].

use crate::field::Felt;
use crate::{POSEIDON2_WIDTH, POSEIDON4_WIDTH};
use once_cell::sync::Lazy;

/// 3x3 matrix for the width-3 permutation.
pub static M3: Lazy<[[Felt; POSEIDON2_WIDTH]; POSEIDON2_WIDTH]> = Lazy::new(|| {
    let mut m = [[Felt::ZERO; POSEIDON2_WIDTH]; POSEIDON2_WIDTH];
    for (i, row) in MDS3.iter().enumerate() {
        for (j, limbs) in row.iter().enumerate() {
            m[i][j] = Felt::from_u256_le(*limbs);
        }
    }
    m
});

/// 5x5 matrix for the width-5 permutation.
pub static M5: Lazy<[[Felt; POSEIDON4_WIDTH]; POSEIDON4_WIDTH]> = Lazy::new(|| {
    let mut m = [[Felt::ZERO; POSEIDON4_WIDTH]; POSEIDON4_WIDTH];
    for (i, row) in MDS5.iter().enumerate() {
        for (j, limbs) in row.iter().enumerate() {
            m[i][j] = Felt::from_u256_le(*limbs);
        }
    }
    m
});
pub(crate) const MDS3: [[[u64; 4]; 3]; 3] = [
    [
        [0xba01b7a582af8839, 0xaf6c34a56f1e3c6c, 0xf3fbdba05adc0a64, 0x44d46fa01da5117c],
        [0x5a65a784ff14b250, 0x626e1ae605378c99, 0xb44507505bba0e3a, 0x3fe667e00c2b55ca],
        [0xab85fd269bd880d9, 0xf2331516053550b2, 0x51deaa55ffd4bb75, 0x63ce26c4206c020d],
    ],
    [
        [0x1467c45c79019119, 0x89050302f55bfdf8, 0xb00dec34395420d7, 0x42ef9cc13681afd5],
        [0x935a0c875e4e70b3, 0x8726033dc2ef49a2, 0x5ce13fb6befa8c6a, 0x0e5584fa583dbae9],
        [0x614e27d5df217a8d, 0x59d2f0c278522abe, 0x1d2fdb568dd5e251, 0x5e8641d1c62a0c9d],
    ],
    [
        [0x613548961eba050f, 0x778673b33370e0c1, 0x2fb34e6404e4c5a3, 0x16582a527dd2eaa7],
        [0xb266295b4d8f7953, 0x279d6386d13ffe4d, 0x6666cf14bbc5781c, 0x0b69c4e8a57aea1a],
        [0x780e71fe3a3d9a2a, 0x8b44cad327804ef6, 0x5079353abbcfb045, 0x42d7e3dffaf0722a],
    ],
];
pub(crate) const MDS5: [[[u64; 4]; 5]; 5] = [
    [
        [0x27aa2a4d53cf7081, 0x38604b5bb2f2ab2c, 0xace8f91ac726180f, 0x5edc4de43ff07c60],
        [0x5df1b25ea0d9d4a3, 0xe5cb1d7cec432d11, 0x1931e2bcb8695897, 0x21c0f632624d48a1],
        [0x0b92a5ab82ee1b38, 0x9c32439c0869f1aa, 0x56286afa4ec59b4c, 0x4243ff5f4a234a22],
        [0xf7f6170e5c8cd073, 0x9d07b548c816668a, 0xe07e7e6aa563931b, 0x7344ba891ca71591],
        [0x036bfe255d3d2f19, 0x55e4b46414af1dad, 0xb81609d1e9de98f2, 0x20c42fc15a32ed98],
    ],
    [
        [0xac7ec1f5c38881f2, 0xdede54596e3cc426, 0x09c22fe4ec756ab3, 0x68186626fb0239ce],
        [0x9c3c60867fab0372, 0x576d4d1c05eaf071, 0xab39316b544da5e6, 0x1cdfe1f1de4a7290],
        [0xe926718e92f7e573, 0x30fdf87a5962a442, 0xe0b3711c4aba9a66, 0x1992e57fe5537033],
        [0x864e8fecdb3ccd4a, 0xca6e1d2125d0c03d, 0xb5a95e6f8e1d6e5a, 0x5033856a6fe61acb],
        [0x39a67bc9466cceb2, 0xaaca49585c3f08fb, 0x1cf3e30a7ab45c59, 0x09e7c08b5c328975],
    ],
    [
        [0x5c6a20f4164f7c93, 0x172678891e35c889, 0x6a3198b94a158121, 0x73ac6ff5f192940a],
        [0xeb74ee152e90e952, 0xc197bb9592e15d4f, 0x43ff372db13fa55a, 0x03ac6b5eccedc5da],
        [0x5309c7937054f842, 0xf84d89f342f0eb45, 0x8a24db9e42219c68, 0x1574427d32abdcde],
        [0xbeefb95b2c59288d, 0xc2654527ee9e5359, 0x56217b8fd134560f, 0x21fcae8d9f8f62a9],
        [0xe75682fbfa1ef7f9, 0x03b6e7f121df734c, 0x6a1d3e91999c842f, 0x06ca0c88a6163295],
    ],
    [
        [0x35abbf4eddcbd7dd, 0x98a2625bf837b95a, 0xf73b8cd2407d7db6, 0x4ce4f0699adf8172],
        [0x3979fc08d3ab3a99, 0x787745b2761df220, 0xc67ce285e743094a, 0x1a0f8b3e444c78fc],
        [0x7ff6b705f159e4af, 0x3ae33a5df8b18186, 0xc119dd0acaea02ea, 0x40a3f19fa4064fd9],
        [0xb45de4051d90065c, 0x8a0198e8f604ae06, 0x9f8a20682c4104c4, 0x051d14de8bbf745f],
        [0x8952aa88f7433a80, 0x41a0a91df79bed87, 0x910a8cc18c9ab58d, 0x294ce128d90968ca],
    ],
    [
        [0xbfe25a7915d8885f, 0xa20d383b17fa5a23, 0xc7ee982d5a044b89, 0x637e4ac13df1eefb],
        [0x7644ce726da53c3b, 0x42997eeaf162fdda, 0xc5eedf76619630dc, 0x35151e81622f69de],
        [0x16e3d53390922a1e, 0x64c69ce781aa7fa6, 0x6ed7573b46506eff, 0x707fbbeb0bf2b5aa],
        [0x6a30a3f1af778f63, 0xa90d6928976a3f99, 0x6750caa31382bea4, 0x5e876f8493c339c3],
        [0xc62c3bf940ca5bcd, 0xb49136e23fe6f0d1, 0x3d207272ad07359b, 0x121909e9d5554a3b],
    ],
];
