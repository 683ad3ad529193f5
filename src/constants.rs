// SPDX-License-Identifier: MIT
//! Round-constant tables for both permutation widths.
//!
//! These are fixed configuration data, not derived at runtime: byte-for-byte
//! the output of the Grain LFSR procedure reproduced in [`crate::params`],
//! stored as little-endian limbs of the canonical values and converted once
//! into field elements on first use. Editing a single entry breaks
//! compatibility with the off-chain reference digests, so any change here
//! must come with regenerated tables *and* revalidated test vectors.
//!
//! Layout: round-major, then position-major, `[round][slot]`, 64 rounds
//! per width (8 full + 56 partial).

use crate::field::Felt;
use crate::{POSEIDON2_WIDTH, POSEIDON4_WIDTH, TOTAL_ROUNDS};
use once_cell::sync::Lazy;

/// Width-3 constants, grouped per round.
pub static POSEIDON2: Lazy<[[Felt; POSEIDON2_WIDTH]; TOTAL_ROUNDS]> = Lazy::new(|| {
    let mut arr = [[Felt::ZERO; POSEIDON2_WIDTH]; TOTAL_ROUNDS];
    for (round, row) in RC3.iter().enumerate() {
        for (slot, limbs) in row.iter().enumerate() {
            arr[round][slot] = Felt::from_u256_le(*limbs);
        }
    }
    arr
});

/// Width-5 constants, grouped per round.
pub static POSEIDON4: Lazy<[[Felt; POSEIDON4_WIDTH]; TOTAL_ROUNDS]> = Lazy::new(|| {
    let mut arr = [[Felt::ZERO; POSEIDON4_WIDTH]; TOTAL_ROUNDS];
    for (round, row) in RC5.iter().enumerate() {
        for (slot, limbs) in row.iter().enumerate() {
            arr[round][slot] = Felt::from_u256_le(*limbs);
        }
    }
    arr
});

pub(crate) const RC3: [[[u64; 4]; 3]; 64] = [
    [
        [0x28e942e836c1a875, 0x4a0ed33f33eaccc6, 0x49e44936b7c09364, 0x6f007a551156b3a4],
        [0x57538c2596426303, 0x4e71162f31003b70, 0x353f628f76d110f3, 0x360d7470611e473d],
        [0x3e9d0977edcdc0f6, 0x96484965f7036dce, 0x019091f007a44ca9, 0x4b5fec3aa073df44],
    ],
    [
        [0x6100c76bcc973a11, 0x9e06cd1c383ac5b0, 0xb84cce715e539f84, 0x67cf1868af6396c0],
        [0x3a771a5c9c8257aa, 0xd3e8c98968e516a2, 0x5d3de70fde83f1c7, 0x555db4d1dced819f],
        [0xbdb74213bf63188b, 0x4908ac2f12ebe06f, 0x5dc3c6c5febfaa31, 0x2bab94d7ae222d13],
    ],
    [
        [0xf2e50d6d1ebb77c2, 0xb6d7d2c950ccf98c, 0xfa7882799d6dd049, 0x66f44be5296682c4],
        [0x0939d92753cc5dc8, 0xef77e7d736766c5d, 0x2bf03e1a29aa871f, 0x150c93fef652fb1c],
        [0x14259dce537782b2, 0x03cc0a60141e894e, 0x955d55db56dc57c1, 0x3270661e68928b3a],
    ],
    [
        [0xce9fb9ffc345afb3, 0xb407c370f2b5a1cc, 0xa0b7afe4e2057299, 0x073f116f04122e25],
        [0x5e654c71f32aa23f, 0x8c2aaeb1dd0f09d6, 0x3dd8dce24f69e76f, 0x409fda22558cfe4d],
        [0x8ebad76fc71554d8, 0x55c9cd2061ae93ca, 0x7affd09c1f53f5fd, 0x2a32ec5c4ee5b183],
    ],
    [
        [0xcfd3a3e8eb55b1d4, 0xd571c6f984195eb9, 0x55b7124fffba5d6b, 0x5848ebeb5923e925],
        [0x2d8ccbe292efeead, 0x634d24fc6e2559f2, 0x651e2cfc740628ca, 0x270326ee039df19e],
        [0xa068fc37c182e274, 0x8af895bce012f182, 0xdc100fe7fcfa5491, 0x27c6642ac633bc66],
    ],
    [
        [0x9ca18682e26d7ff9, 0x710e1fb6ab976a45, 0xd27f57396989129d, 0x1bdfd8b01401c70a],
        [0x7d90f672414e8a4a, 0x879bf8289662e1f5, 0x05fe4794adb44a30, 0x491b9ba6983bcf9f],
        [0xc832d824261a35ea, 0xf4f6fb3f9054d373, 0x14b9d6a9c84dd678, 0x162a14c62f9a89b8],
    ],
    [
        [0xf79824667b5b6bec, 0xac0a1fc71e2cf0c0, 0x2af6f79e3127feea, 0x2d193e0f76de586b],
        [0x6a732a3906a07b95, 0x24ddcc6e9863885a, 0xfdc9ca5c04b0982f, 0x46efd8a9a262d6d8],
        [0xe75cbb780693a798, 0xf0788294351ad07a, 0x2d8dca2973b3db45, 0x509717e0c200e3c9],
    ],
    [
        [0xe227252820f01bfc, 0xdca9c2c014118789, 0xb9d4df61380f39c0, 0x7299b28464a8c94f],
        [0x5d0bf58dc8a4aa94, 0x4feff82984990ff8, 0x81696ef1104e674f, 0x044ca3cc4a85d73b],
        [0x6198785f0cd6b9af, 0xb8d9e2d4f314f46f, 0x1d0453416d3e235c, 0x1cbaf2b371dac6a8],
    ],
    [
        [0x343e07610f3fede5, 0x293c4ab038fdbbdc, 0x0e6c49d061b6b5f4, 0x1d5b2777692c205b],
        [0x37ad047c6edb59ba, 0x8ad88c4b33a57804, 0x3e85e1698c81c77f, 0x56ae7c7a5293bdc2],
        [0xf60e971b8d73b04f, 0x06a9adb0c1e6f962, 0xaa30535bdd749a7e, 0x2e9bdbba3dd34bff],
    ],
    [
        [0x035a13661f22418b, 0xde40fbe26d047b05, 0x8bd5bae36969299f, 0x2de11886b18011ca],
        [0xbc998884ba96a721, 0x2ab9395c449be947, 0x0d5b4a3f1841dcd8, 0x2e07de1780b8a70d],
        [0x825e4c2bb74925ca, 0x250440a99d6b8af3, 0xbbdb63dbd52dad16, 0x0f69f1854d20ca0c],
    ],
    [
        [0x585d04b135b957ca, 0xd22e513a05838cd4, 0xafb87b655dd58cc1, 0x5dc987318e6e59c1],
        [0x29dc91de95ef53f6, 0x97696b1bb678633a, 0x6c01dc639a85f072, 0x48b725758571c9df],
        [0xca4e5c611b2a3718, 0x73afd10bb6d17d13, 0x256b56490eaee1d5, 0x5e565e08c0821099],
    ],
    [
        [0x816c059422dc705e, 0x6ce5113507f96de9, 0x0d135dc639fb09a4, 0x2eb1b25417fe1767],
        [0xb8b1bdf4953bd82c, 0xff36c661d26cc42d, 0x8c24cb44c3fab48a, 0x115cd0a0643cfb98],
        [0xde801612311d04cd, 0xbb57ddf14e0f958a, 0x066d7378b999868b, 0x26ca293f7b2c462d],
    ],
    [
        [0x6992816b99c528ac, 0x3e45326e4d4b9de2, 0x311a6b5b762011ab, 0x4147400d8e1aaccf],
        [0x519a2f73e6db4d55, 0xd4a72976c268ea30, 0x68f6bdcc4d372848, 0x6b0db7dccc4ba1b2],
        [0xf5209d14b24820ca, 0x0f160bf9f71e967f, 0x2a830aa162412cd9, 0x17bf1b93c4c7e01a],
    ],
    [
        [0x4cac81a39d3cf8f1, 0xd0e66a8bffa8c846, 0xcf1eca6f9e9c1839, 0x4b431cd9efedbc94],
        [0x05c86f2e7dc293c5, 0xe03c0354bd8cfd38, 0xa24f8456369c85df, 0x35b41a7ac4f3c571],
        [0x72ac156af435d09e, 0x64e14d3beb2dddde, 0x435927994849bea9, 0x3b1480080523c439],
    ],
    [
        [0x271618d874b14c6d, 0x08e286442a2d3eb2, 0x4950856dc907d575, 0x2cc6810031dc1b0d],
        [0xbcabdd5cb5477d51, 0x04afea06c3c92826, 0x5ba6790efd71c70c, 0x6f4141c8401c5a39],
        [0x91f318c09f0cb566, 0x9e517aa93b78341d, 0x059618e2afd2ef99, 0x25bdbbeda1bde8c1],
    ],
    [
        [0xc6313487073f7f7b, 0x2a5ed0a27b61926c, 0xb95f33c25dde8ac0, 0x392a4a8758e06ee8],
        [0xe7bbcef02eb5866c, 0x5e6a6fd15db89365, 0x9aa6111f4de00948, 0x272a55878a08442b],
        [0x55aa05fd6938eab5, 0xab463acfc9d184b3, 0x24ee89a30730aef7, 0x631ec1d6d28dd9e8],
    ],
    [
        [0x0818a100409dc6f2, 0xcd8225e7e5c3833a, 0x02c7449bfbddc35b, 0x4eb6fda10fd0fbde],
        [0x9b925b3c5b21e0e2, 0xa6ebba011694dd12, 0xefa13c4e60e26239, 0x2d5b308b0cf02cdf],
        [0xef38c57c311673ac, 0x44dff42f18b46c56, 0xdd5d293d72e2e5f2, 0x16549fc6af2f3b72],
    ],
    [
        [0xba975ba1a92be382, 0x2e39bd5e22340bb9, 0x8db836d9f5fb5482, 0x42332677ff359c5e],
        [0xea725ddc97723a94, 0xd9849b5610465f09, 0x9bc5ccc3b44c6075, 0x49d7d2c0b449e517],
        [0x684ca0351d967904, 0x4985fc9ecb416b9f, 0x31757cc4c6226f6e, 0x64c20fb90d7a0038],
    ],
    [
        [0xfe73b5c8d5580934, 0x71c940b9758ca820, 0x1bc443d7979510d7, 0x59cff40de83b52b4],
        [0xf4f80dd53ebb71b0, 0x808285cdbc621d7a, 0x4edd875fe3b7c882, 0x53db2731730c39b0],
        [0x9b7126d9b46860df, 0x7639826534420311, 0xfa69c3a2ad52f76d, 0x1b10bb7a82afce39],
    ],
    [
        [0xeb319f91046a63c9, 0x1596d3aac7c5700c, 0x79c4dd7f84cdd153, 0x561b6012d666bfe1],
        [0x90d27f6a00b7dfc8, 0xd1b36968ba0405c0, 0xc79c2df7dc98a3be, 0x0f1e7505ebd91d2f],
        [0xff457756b819bb20, 0x797fd6e3f18eb1ca, 0x537a7497a3b43f46, 0x2f313faf0d3f6187],
    ],
    [
        [0xf0bc3e732ecb26f6, 0x5cad11ebf0f7ceb8, 0xfa3ca61c0ed15bc5, 0x3a5cbb6de450b481],
        [0xeb264702714ccf94, 0x6454c0348ee38fab, 0xf6716aefbd0e2450, 0x681d93411bf8ce63],
        [0x7c4831a7672777fb, 0xa7b8f2e9ee1fdc67, 0x2646b436727f0e80, 0x5178e940f5000431],
    ],
    [
        [0x865527cbca915982, 0x51baa6e20f892b62, 0xd92086e253b439d6, 0x3dab54bc9bef688d],
        [0xd69de321009015d0, 0x18448bbf3972e1aa, 0xe905f84eaa5b2b38, 0x4b3ce75311218f9a],
        [0x368045acf2b71ae3, 0x4c24b33b410fefd4, 0xe280d31670123f74, 0x06dbfb42b979884d],
    ],
    [
        [0xa7fc32d22f18b9d3, 0xb8d2de72e3d2c9ec, 0xc6f039ea1973a63e, 0x068d6b4608aae810],
        [0x55954f27a79cebef, 0x8acc7e4fe8f69f29, 0x084a57d3b1d96427, 0x4c5c254589a92a36],
        [0x1d9560b3475a77eb, 0xaabab55f67ccc4f7, 0xc32da15b4bb9683f, 0x6cbac5e1700984eb],
    ],
    [
        [0x9fc4898069eb983c, 0x37ec30b0737aa240, 0x738a5c6278eaab1c, 0x4603c403bbfa9a17],
        [0xc56aacd16bc2f100, 0x92a9c833a9234c31, 0x70a712a6345ae6b1, 0x6894e7e22b2c1d5c],
        [0x905b7d4d65c58ebb, 0x31eea799b93f226e, 0x8afa4d1eabc7f3d2, 0x5be2cbbc44053ad0],
    ],
    [
        [0xd7711e47063fa611, 0x8da0f7e713a5c6d0, 0x08624a8c2a353d52, 0x58e55f287b453a98],
        [0x2b5dfcc5572555df, 0xb868a7d7e1f1f69a, 0x0ee258c9b8fdfccd, 0x366ebfafa3ad381c],
        [0xd09c3f5d784d67ce, 0xc10518a819ebbcc4, 0x2f90d97ccf5504dd, 0x45766ab728968c64],
    ],
    [
        [0xe6bc229e95bc76b1, 0x7ef66d89d044d022, 0x04db3024f41d3f56, 0x39678f65512f1ee4],
        [0x868f18ffae30cf4f, 0xc0eb8c51551906a8, 0x3078be5bf7bfc46f, 0x463aed1d2f1f955e],
        [0xe534c88fe53d85fe, 0xcf82c25f99dc01a4, 0xd58b7750a3bc2fe1, 0x21668f016a8063c0],
    ],
    [
        [0x4bef429bc5331608, 0xe34dea56439fe195, 0x1bc749363e98a768, 0x39d00994a8a5046a],
        [0xe9d1021773bd07cc, 0xc2bba91f261996b8, 0x33984de32c0b48fa, 0x4d7f5dcd78ece9a9],
        [0x770c956f60d881b3, 0xb163d41605d39f99, 0x6b203bbe12fb3425, 0x1f9dbdc3f8431263],
    ],
    [
        [0x9794a9f7c336eab2, 0xbe0bc829fe5e66c6, 0xe5f17b9e0ee0cab6, 0x027745a9cddfad95],
        [0x52025657abd8aee0, 0x2fa43fe20a45c78d, 0x788d695c61e93212, 0x1cec0803c504b635],
        [0xd3872a9559a03a73, 0xed5082c8dbf31365, 0x72077448ef87cc6e, 0x123523d75e9fabc1],
    ],
    [
        [0x001779e3a1d357f4, 0x27feba35975ee7e5, 0xf419b848e5d694bf, 0x1723d1452c9cf02d],
        [0x747906449058077a, 0xe188a398288014f1, 0x34ec4ae1e358e471, 0x557b5af29163a600],
        [0x9dab1ee4dcf96622, 0x21c3f776f572836d, 0xfcc0573d7e613694, 0x1739d180a16010bd],
    ],
    [
        [0x70290452042d048d, 0xfafa96fbeb0ab893, 0xacce32391794b627, 0x2d4e6354da9cc554],
        [0x670bcf6f8b485dcd, 0x8f3bd43f99260621, 0x4a869553c9d007f8, 0x153ee6142e535e33],
        [0x7aae750c35afccb6, 0xad1935dc98e08679, 0x827f654f2c5a7ab5, 0x71773e86c806833f],
    ],
    [
        [0xd258d2e2b7782172, 0x968ad4424af83700, 0x635ef7e7a430b486, 0x0c45bfd3a69aaa65],
        [0x0e5633d251f73307, 0x6897ac0a8ffa5ff1, 0xf2d56aec83144600, 0x0adfd53b256a6957],
        [0x9d2fb88eae087a1f, 0xf1d1dc75259d2522, 0x2b1a9adfd5e2f5f2, 0x41d52090ea5b4340],
    ],
    [
        [0xc0ba7f3e9ec396f1, 0x4d93d12cbb53a10f, 0x334ecd13f72e69bd, 0x4ecdf55bd36d423a],
        [0xac9d36a8b7516d63, 0x3f87b28f1c1be4bd, 0x8cd1726b7cbab8ee, 0x315d2ac8ebdbac3c],
        [0xcc015562c9226432, 0xa21709c9411cee63, 0x2a051d9906066d04, 0x49261a5d6cfd4a9f],
    ],
    [
        [0x26f3898cce337817, 0xf7a7cfca052ff515, 0x048f6dcb7b695b69, 0x40153234da114723],
        [0xd3c0d64738f61bad, 0xcf808cefbeccb1bd, 0x121bc3c2c4ac3e76, 0x6e986d063d9fffc8],
        [0xe8f67534ca273948, 0xeec452eedf44871d, 0x1c24a4cbc7693894, 0x5283f80e81fc4e4d],
    ],
    [
        [0xb12a066274c5a3f4, 0x844f896957a41921, 0x69aef8aac5710e8d, 0x552576887491b06d],
        [0x378338df48d6e398, 0xa99ba75b7b7e5995, 0x5048a1198b73d5c3, 0x59332dc761e3ad27],
        [0x299ce44ea423d8e1, 0xc9bb60d1f6959879, 0xcfaec23d2b16883f, 0x1b8472712d02eef4],
    ],
    [
        [0x5505586ae95eab68, 0x759e70e01221c74d, 0x8e36b59ab0e33001, 0x4945c4c7c62282f0],
        [0x4c0176c94c1b9e95, 0x413bd07c7430f7a5, 0x87b4b06539a1554c, 0x6f7d34b9199bf60a],
        [0xc4a5404198adf70c, 0x367d2c54e36928c9, 0xbd0b70fa2255eb6f, 0x3c1cd07efda6ff24],
    ],
    [
        [0x29394841274c91d2, 0xad9eb5c8c084d5d8, 0x92932995e80188c7, 0x72ed857fbb581d2d],
        [0xbbe523aef9ab107a, 0x4a16073f738f7e0c, 0x687f4e51b2e1dcd3, 0x136052d26bb3d373],
        [0xad102f014b6658c7, 0x653ec1e760cc09f5, 0x1c4894438841d441, 0x623f02ec81879294],
    ],
    [
        [0x589583ba658d4348, 0xed9541807df5a911, 0xfea7ad49bf6d814d, 0x51c0b9b1022de4d0],
        [0x68724ec3239f8463, 0x8dc800179ca75308, 0x04b48024c56f8310, 0x42c1e81b61b7fc0b],
        [0x208202d2e31fd072, 0x0bcf843897bc6823, 0xf10a8fc71ab6d7c3, 0x42ce8d45e3f7bbf7],
    ],
    [
        [0x4bcce9c75c22f738, 0x0b93965712e43139, 0x064e2f0fdee7a37b, 0x6e53bfc3ec7be39c],
        [0x676c36c24ef967dd, 0x7b3cfbb873032681, 0xc1bdd859a1232a1d, 0x16c96beef6a0a848],
        [0x067eec7f2d6340c4, 0x012387bab4f1662d, 0x2ab7fed8f499a9fb, 0x284b38c57ff65c26],
    ],
    [
        [0x60bfc6cebebb5ac1, 0x20ea23a9fe16273d, 0xf85d4bdfc76f8374, 0x70cb7ad7798e307e],
        [0xaf1dff204c922f86, 0xfc06772c1c0411a6, 0x39e242198897d17c, 0x0c5993d175e81f66],
        [0xbbf53f67b1f87b15, 0xf24887ad48e17759, 0xfcda655d1ba9c8f9, 0x03bf7a3f7bd043da],
    ],
    [
        [0x9b5cd09e36d8be62, 0x4c8f9cbe69f0e827, 0xb0cf999567f00e73, 0x3188fe4ee9f9fafb],
        [0xafea99a2ec6c595a, 0x3af5bf77c1c42652, 0x5a39768c480d61e1, 0x171f528ccf658437],
        [0x5a0563b9b8e9f1d5, 0x812c3286ee700067, 0x196e41859b35ef88, 0x12f4175c4ab45afc],
    ],
    [
        [0x0e74d4d369118b79, 0x7e23e1aabe96cfab, 0x8f8fdcf800a9ac69, 0x3a509e155cb7ebfd],
        [0x98712c65678cfd30, 0x984bc8f2e4c1b69e, 0x1a89920e2504c3b3, 0x10f2a685df4a27c8],
        [0x1ed3363404687f05, 0x90af37d616015a88, 0x9ed8c6f81104cb63, 0x4959043e2135e038],
    ],
    [
        [0x1c47f08dae05fddd, 0x1edc155f03bf7f87, 0x8262e371dbafcbba, 0x52bd4073f5f90044],
        [0xe8a16728cc9d4918, 0x54573c9333c56321, 0x1d8d93d54ab91a0e, 0x09e5f49790c8a0e2],
        [0x609a740347cf5fea, 0x42d17ed6ee0fab7e, 0x2bf35705d9f84a34, 0x352d69bed80ee3e5],
    ],
    [
        [0x3a758af6fa84e0e8, 0xc634debd281b76a6, 0x491562faf2b190d3, 0x058ee73ba9f3f293],
        [0x75ef855b3d999798, 0x47b12f279437ccd3, 0xd4760ab3c3b96689, 0x6184c223124d658c],
        [0x434998dfc696c115, 0xfff8d09680344bc7, 0xc91afa790b6f84c0, 0x6ea989c63c451341],
    ],
    [
        [0x13685982e8121812, 0xf8de139c4a488a06, 0x81f9196c9db8a7ab, 0x57f4ac045fb78ade],
        [0x7c5b49e259491b94, 0x767352b5071a0d31, 0x88ee79c1752a74ce, 0x6dbfdc64a545237a],
        [0x621a132510a43904, 0x092cb92119bc76be, 0xcd0f1fc55b1a3250, 0x232f99cc911eddd9],
    ],
    [
        [0xc3b97c1e301bc213, 0xf9efd52ca6bc2961, 0x86c22c6c5d4869f0, 0x201beed7b8f3ab81],
        [0x2223d9e77ef87b2d, 0xd5e97eb59381fc87, 0x1a082e28c55458cc, 0x4b99c756e1e0b949],
        [0xbf6b3431ba94e9bc, 0x29388842744a1210, 0xa1c9291d58602f51, 0x1376dce6580030c6],
    ],
    [
        [0x6454843c5486d7b3, 0x072ba8b02d92e722, 0x2b3356c38238f761, 0x1793199e6fd6ba34],
        [0xbfc74c8721472d98, 0x217d264c7975256f, 0xe188947dc3ee984e, 0x5048857b8872cc1d],
        [0xdade9f89de8b3bbf, 0x2cd9b61c7755fe46, 0x1854e3ededdd5294, 0x5c772c20fc285d3e],
    ],
    [
        [0x5bfcceba1ae18879, 0x60fe77dfe7bbb86b, 0xd092e810909a916c, 0x6e40d518ae3ce6ca],
        [0x06a3f1d3b433311b, 0x3c66160dc62aacac, 0x9fee9c20c87a67df, 0x22de7a7488dcc735],
        [0x30d6e3fd516b47a8, 0xdbe0b77fae77e1d0, 0xdf8ff37fe2d8edf8, 0x3514d5e9066bb160],
    ],
    [
        [0x19377427137a81c7, 0xff453d6f900f144a, 0xf919a00dabbf5fa5, 0x30cd3006931ad636],
        [0x6dcfc378b662c474, 0xe4959835d1a83999, 0x14e5c48b915f6b41, 0x6203ad60b0341baa],
        [0xce7ae94770d76254, 0xb674dae77042ae7d, 0x8007c0f3af24de07, 0x71e8d0ac035e59bf],
    ],
    [
        [0x5b6a74220692b506, 0x8f9e4b2cae2ebb51, 0x41f81a5cf613c8df, 0x253d1a5c52934127],
        [0x73f666cb86a48e8e, 0x851b3a59c990fafc, 0xa35e9613e7f5fe92, 0x035b461c02d79d19],
        [0x35b334977c0fecc5, 0x648da4de0e86f19d, 0x9800c8e3956f5f26, 0x44476886a8f10f58],
    ],
    [
        [0x7cfbf86a3aa04780, 0x92b1283c2d5fccde, 0x5bc00eedd56b93e0, 0x23a9928079d175bd],
        [0xf1e4ccd73fa00a82, 0xb5e2ea3436eef957, 0xf1594a0763c611ab, 0x13a7785ae134ea92],
        [0xbbf04f5252de4279, 0x3889c57863446d88, 0x4962ae3c0da17e31, 0x39fce308b7d43c57],
    ],
    [
        [0x3b57e34489b53fad, 0xbef00a08c6ed38d2, 0xc0fdf01662f60d22, 0x1aae18833f8e1d3a],
        [0x55513e033398513f, 0x27c1b3fd8f85d8a8, 0x8b2e80c064fd83ed, 0x1a761ce82400af01],
        [0xa4e385d6fae179f0, 0xa7ef1ec487821005, 0xbf553cf334d88ed8, 0x64df4c0ecc132a1e],
    ],
    [
        [0xa1ae44cdbf452141, 0x87220d2c5ce5713c, 0x7897c4062665e156, 0x47940c32599822d6],
        [0x5244ca749b73e481, 0xdcf6af2830a50287, 0x16dd1a87ca22e1cc, 0x275a03e45adda7c3],
        [0x58a253cfb6a95786, 0x07e561453fc5648b, 0xeb08e47e5feabcf8, 0x2e5a10f08b5ab8bb],
    ],
    [
        [0x61477bd2d2cdf30d, 0xefef1919cd3424a1, 0xeba0b6ca567a5e01, 0x6b4216c76c229946],
        [0xe033d82cefe78ce3, 0xc141a5b6d594bec4, 0xb84e9c333b2932f1, 0x1459cb8587208473],
        [0x5cec7e7b338fbe1b, 0x52f9332fbffcfbbd, 0x7b92ce810e14a400, 0x193ae5921d78b5de],
    ],
    [
        [0x60224be67248e82c, 0x374384f4a0728205, 0x89111fb2c4660281, 0x3097898a5d0011a4],
        [0x549980de862930f5, 0x1979b2d1c465b4d9, 0x571782fd96ce54b4, 0x378d97bf8c864ae7],
        [0xadc35ce03f59d08e, 0x734378eabcda9b48, 0xaea5ca5fda898a41, 0x47e939590928513a],
    ],
    [
        [0x37ea32a971d17884, 0xdbc7f5cb46093421, 0x88136287ce376b08, 0x2eb04ea7c01d97ec],
        [0x16f64b24ab49cf05, 0x1e163418f3ebf823, 0x2be2633ada541e1d, 0x668a95bddfb87873],
        [0x56260a46ba14b26d, 0x628a683f22ab2452, 0x985f839e7cd61fae, 0x57ff77ffd3ab3372],
    ],
    [
        [0xf855edd27597e7af, 0xfd3c1786cec9a1b8, 0xb8957c496316b4fc, 0x4e185328f8228371],
        [0xead3726f1af2e7b0, 0x861cbda476804e6c, 0x2302a1c22e49baec, 0x36425347ea03f641],
        [0xcdb5b3ef7e617b78, 0xafe09f699191c41a, 0xca3d3590dcc9ca41, 0x51b825d33b31b018],
    ],
    [
        [0xecd627e59590d09e, 0x3f5b5ca5a19a9701, 0xcc996cd85c98a1d8, 0x26b72df47408ad42],
        [0xf82eda0e3baef82d, 0x65e39a2289df756e, 0xe5e67fbab2857f76, 0x629f82ef3b843d15],
        [0xb2565b42c81678df, 0x61a36e5bd630fbc5, 0xa1b804e493ea27d6, 0x57da05c9a95902ae],
    ],
    [
        [0x5466747ca7d79dec, 0x6322fb749f73c9e9, 0x0b9741e936b955bc, 0x65bb185aa22d4a6d],
        [0x59bece31f0a31e95, 0xde01212ee4588f89, 0x1f05636c610b89aa, 0x130180e44e2924db],
        [0x9ea8e7bc79263550, 0xdf7793cc89e5b52f, 0x73275acaed5f579c, 0x219e97737d3979ba],
    ],
    [
        [0x644532e1c79a1800, 0xa6728be3fc54fab3, 0x73a8654e32dd4190, 0x4043fd3082574e57],
        [0x071dc0f28a21c720, 0x71d81f000d5c4d2f, 0xd9cbc1df6bd8549c, 0x5784e5360ffb6781],
        [0x9c12635df251d153, 0x3b0672dd7d42cbb4, 0x3461363f81c489a2, 0x3cdb93598a5ca528],
    ],
    [
        [0x2861ce16f219d5a9, 0x4ad0447045a7c5aa, 0x20724b927a0ca81c, 0x0e59e6f332d7ed37],
        [0x86718f66cfe1df08, 0x38a48f0fa72fc062, 0xddcb3424ff2ab8d1, 0x57afcf069f3680a6],
        [0x769a61f5f0c66085, 0x0828fd09ec92e732, 0xc1a17fb1bc710169, 0x51ba5d4899d7835e],
    ],
    [
        [0x43b0a3fcff2036bd, 0x172cc07b9d33fbf9, 0x3d7369467222697a, 0x1b064342d51a4275],
        [0x874adebb2902df82, 0x6da6e4df67ef4ede, 0x7472c3ad5a0d3308, 0x54aef45559da8b2c],
        [0x3eb310228a0e5f6c, 0x78fa9fb9171221b7, 0x2f363c55b2882e0b, 0x30b82a998cbd8e8a],
    ],
    [
        [0xa8147a560db320c5, 0x1a6c9889ac6c78ec, 0xa40ebdf2c848c8ab, 0x523a56f81ba90ef3],
        [0xa613b282fb1fd4b4, 0xd3a0931cad9a575d, 0xd357e215fe5c7ec1, 0x4fc581cc0a10b8c1],
        [0xe46f6d4298740107, 0x8ad71ea715be0573, 0x63df7a76e858a4aa, 0x23e4ab37183acba4],
    ],
    [
        [0xfca995e2b59914a1, 0xacfe14640de044f2, 0x5d33094e0beda75b, 0x2795d5c5fa428022],
        [0xc26d909dee8b53c0, 0xa6687c3df16c8fe4, 0xd765f26dd03f4c45, 0x3001ca401e89601c],
        [0xe7fea6bdf3471380, 0xe84b5bebae4e501d, 0xf7bf86e89280827f, 0x0072e45cc676b08e],
    ],
    [
        [0xfff6f239e30cbfa7, 0x420d3020e1713cf6, 0xcf8eeaa5d060db37, 0x522338e1bf861c22],
        [0x57b618dd020277ff, 0x09088f95fd8322f9, 0x57aabb383afa5baf, 0x6fde059ef86c70e4],
        [0xd0c54ddeb26b86c0, 0xb64829e2d40e41bd, 0xe2abe4c518ce599e, 0x13de705484874bb5],
    ],
];
pub(crate) const RC5: [[[u64; 4]; 5]; 64] = [
    [
        [0x47cc4d7726c77d3d, 0x6e4625b2dc92b869, 0x1a9c78919fe50527, 0x5c5bec06aa43ca81],
        [0xa0a19319da4ca232, 0x714d51abbba4301f, 0xb6bc2edbbe091cce, 0x6268bc5f9031edb5],
        [0x35fd9a2644342b6a, 0xd0f4b81f0d34e368, 0xc3333a4fcb784afd, 0x4572aeff3e581883],
        [0x32f0c05cdaf439f8, 0x7e865d85b1cb0f1f, 0xbc8bb58e947fca10, 0x2c44402b93c5ac82],
        [0x88549e05e2018403, 0xb0a11e451b48d22d, 0xd0c9258bee0de17b, 0x023eb54d53e89505],
    ],
    [
        [0x5b222de90b48feec, 0x2a8136da7b276fd9, 0xf506ee54719e6ee2, 0x5c3c49994dfe7863],
        [0x85d42591ca5141a3, 0x2e62ad46932303ce, 0xb3858e40a22f53fa, 0x349b3f7366f89983],
        [0x9bba326455776e91, 0x4df3b6fbb5a581fe, 0x8c1c1c38c9c3abbb, 0x0b383428a756701b],
        [0xe6106185e81a85e1, 0x6c864c49ffba3820, 0xf53b89bae25702ed, 0x6814d01a7834e8f1],
        [0x503e92f520e9a918, 0x4c4867255ea999c6, 0xb12d3fa4476187c1, 0x382d39c6bdbba256],
    ],
    [
        [0x75db0bb328d1061e, 0x252efb8f94740a77, 0x925c668abc3a17a3, 0x507aa38edca7a8d6],
        [0x51fc4e7b7b132d8b, 0x50a675d756e6aed0, 0x7def818257305e9c, 0x3bd1bbe1f40eb3fa],
        [0xc680994321df3f4a, 0xf607cb880ab16330, 0xc4c07ac09d306653, 0x4ddaf59374164d01],
        [0x93f98fa0aa1fbd91, 0xaf73fc20a5355060, 0x02eb60930a7135d4, 0x36a92b9f74005c18],
        [0x2b9e69a07b5965f4, 0xa57fa80865d0beeb, 0xda0c063aa61dad5d, 0x1eeb8e80a4a1382b],
    ],
    [
        [0xcd854a9a965cb77b, 0x78fa53bd900f6bd2, 0xd2abd16265141696, 0x245c1c6d6f21bf7d],
        [0x4a2d369e18a15cdd, 0x8db9c7efee51846f, 0xa4fe71f77e5c9577, 0x4fee9d33743fa477],
        [0x670d44165d269c69, 0x4beed12136837032, 0x0f0b6c8b1c46e916, 0x1a1492b84929e708],
        [0xb3162eafab4e8b07, 0xc0babbe89366dfcb, 0x4257c4e505827bb9, 0x64f9e3fa689c4897],
        [0x8cfd365c313dbd48, 0x8b5e47f3f0e38d63, 0x71d2f2d692c63221, 0x0b0a1a2b2762612d],
    ],
    [
        [0x01f4054f822c5101, 0x4d28ccedb083ab89, 0x9f322767d36fea85, 0x05b20208ea037713],
        [0xdf8c2f24ce81b0cd, 0x6b67dafb6bc5b95a, 0xe99dd94a0b1d2290, 0x0710c608d8a48043],
        [0x8532d788c7fb45e7, 0x01bdc00cc43de260, 0x21836ccefc1fac48, 0x68e5bf430d23864f],
        [0x832ca03b0fc0ed9f, 0x0a22b3c9d2a1f0d9, 0x912b20bf5b919b7e, 0x09221b8a932a7820],
        [0x5c1c44ee78632953, 0x99e7fb992555478d, 0x22b373ef54c1dfb2, 0x65ac3ba4cbab3d26],
    ],
    [
        [0x0b8243718ef12542, 0xdd3802773891f54f, 0x324e306a28896fb1, 0x114be59c06f561e8],
        [0x597efc13f38ff503, 0x6fb3ecca7941391e, 0xd7ffcd9e0b3a58b8, 0x61d96c0b2e0683a2],
        [0x140694c686cbeba9, 0x2e0512004f1af1e3, 0x0d8d1ab122b4c5c9, 0x103454e35e0f4d69],
        [0x95b77ca3a821fe47, 0x2d6c8c4707530661, 0xfc3ad59072a51b9a, 0x2d2d628ded9373dc],
        [0x46da2e1e4b9c98ce, 0x2281545fd99ad3fe, 0xe38344e0e711b9ae, 0x2b0bf337fd4454a5],
    ],
    [
        [0xc7ab5c22fad3cd67, 0x1aced5d9a1c9de5a, 0x2de5963e47cc7dad, 0x0575c431f72a4024],
        [0x196baec197eb3612, 0xdddadca0063dc726, 0x16d3d7726dcf8ecb, 0x0ec8f181daf128e7],
        [0x07fba50dd64b4875, 0x17ea200e62d2349f, 0x2f31c2650f6affd7, 0x33779259084a9446],
        [0x2b32e09ef1add101, 0x44fe2b223bebbbde, 0x335a55fb2af4a240, 0x122bdda32a00e4a3],
        [0x21ef4d583ba736bc, 0x72411ddfaa9bafb4, 0xba9d3c24b2f3f762, 0x14884ad16b1f79e5],
    ],
    [
        [0xe176a40de61e1e70, 0xef3ff652da7f2f93, 0x8ccc35c5fa9d673f, 0x323f85cbba64efc3],
        [0x6cda951a0e3795e3, 0x401f16c61fc3a4e8, 0xd0e41f6fa6f1a488, 0x1a3fac3af20c37ae],
        [0x04cbc0803d47a814, 0x94d2e882e35a4dc8, 0x13656bc801719548, 0x1d927c14cd47e256],
        [0x695584f3ec971eab, 0x8123e4b54290ab6a, 0x88fea20d06270056, 0x22f1a2a2ade490e1],
        [0x42000f486f893a45, 0x690acea9ef5769ce, 0x30937dc5546efb30, 0x2c04db231c81645f],
    ],
    [
        [0x7341438237ad3fc1, 0xccdcf621b0501324, 0x421629278dfa84f2, 0x21385b6f914a8c6f],
        [0xe0234420247e3160, 0xaf07c34cac823388, 0xf3b6cf23718ae736, 0x2f00090ff1cb76ea],
        [0x315f8a30dda4af00, 0xb2e90635a6b038e4, 0x21a434761d5b6a5f, 0x455e8b0828f36670],
        [0xa5f2045fc553211f, 0x54c6c681497a1d4f, 0x87d5556c7c879c7d, 0x028b320c702e0778],
        [0xb67eac15462079f4, 0x6b3ff74190dadba0, 0x2c96e7321ff1c0b7, 0x2502f75174997811],
    ],
    [
        [0xbbea8ece52e0e810, 0xbbdfcc8132bb6dfb, 0xd13408ed76b38ad8, 0x0a02577f723a21ce],
        [0xb1104301163753b7, 0x59b75cfbec4c6f97, 0xc0e61e83b82261a7, 0x55d052b889557f2f],
        [0xe30cca14b8eeb911, 0xe3e88819bc9ed36c, 0x877ccb7e8b1918bb, 0x450a0821b86175e4],
        [0x18702e8ee1631f18, 0xa61d156ec6f0185a, 0x1ab365f26081aea3, 0x4a399ec4758d73d1],
        [0x58f4f94c25b66092, 0xfec118296f4550a0, 0xc0a88b2b7f23672e, 0x1305a1f607f37901],
    ],
    [
        [0x4dc9b2a88969344d, 0x5b081830f3f5bc90, 0xb41a881d5663d8d8, 0x08e98ff1f10c0092],
        [0xa86c5be7b0389487, 0x8342e320b77c1ebd, 0x1a509aff8d2ac258, 0x1a986478818b795d],
        [0x35942d6835665edd, 0xa64f7130ddf89869, 0x6c3a21c7416ad4af, 0x3a68e478946a5cfc],
        [0xd1afb385b1051e3e, 0xaabac9d8882cdf17, 0x8b6e1d46e671d335, 0x115b2ef9469d9140],
        [0x7248fbc8b0d64e9e, 0x3a50072c24d8598b, 0x0d9f06b43947fca0, 0x0b7fe376d67252e9],
    ],
    [
        [0xee6e5466b7295042, 0x0bbdc50cad3edc99, 0x10a92402dc5c5663, 0x621fba0544792a49],
        [0x73b5ddd9702ac19f, 0xee93a948cdee6fe5, 0x992433be07d695f5, 0x47ea2bb0150f7e51],
        [0x260ea700d409d55e, 0x22e8338b51b7a970, 0xf0ae3787ad1c1051, 0x3333d094869d1f23],
        [0x1bed81ef4d405327, 0xe3e8e4b1b5189763, 0x9fa0db7230b3ef9b, 0x36291942b0c4d132],
        [0xe1c16116afa8d432, 0xb25ef86fe73bfd7d, 0xfaa30d0df03cd307, 0x548bdc2c8e44774e],
    ],
    [
        [0xd87a13c5983b50b5, 0x0928c4fd5f47b6cd, 0xb5eff8a312df92db, 0x2ff0b6bb42027bb7],
        [0x027bd6dd4c1c799b, 0x6dc29d769c57a31b, 0xa2ba640706c1f143, 0x4765640bd361f949],
        [0x5e0d2a2fd789a8b8, 0x698ea4248dc68414, 0x007cabd2bd3cf506, 0x311b329ed3aafeae],
        [0xded5a29e64420565, 0xf1de59d415ede6c4, 0x53c4af0b0734e6c1, 0x18cf391449564ad0],
        [0x24e12c1ad57cfe12, 0x091418b2fe5121ce, 0x1e80bc261fbea820, 0x030053d7aa258bd4],
    ],
    [
        [0xe5e49b52ab79ef81, 0x14972cc54cb86f93, 0xed23167c5c2f6cb2, 0x347d2cc8b97eca81],
        [0x23c3bd78072bf437, 0xf177bf4ba4fcd4d9, 0x70d7555087c7384a, 0x73e40cea4c8924cc],
        [0x997b834939f34525, 0xa3886e17dc537ca7, 0xb7185d70543557ac, 0x5d26bfff868d80ac],
        [0x4ccb60ab9d2d3dea, 0xbb1261dfda863efc, 0xcb9a8ae6be869b51, 0x41ebe1430659e09f],
        [0xd70b80239bfc8cc6, 0xa9180a22c10aa859, 0x8ef627a08e9d8667, 0x32f72f5fabe91e61],
    ],
    [
        [0x8d9df72eab4e806c, 0x6a82cd5ac4574beb, 0x7906f3cc43ee935b, 0x0ffdf50ad0cb49c1],
        [0x0388caf2ab833e11, 0xf0e32ba7669040e3, 0xca2bc3c49d6060f4, 0x61374dc1b440ea38],
        [0xdce72bd7d70acb4b, 0x77bd68025545246e, 0x059a21d5ef05e9e4, 0x27ec5217fa23b99f],
        [0xe74257df856440ce, 0x77f89f44bd08d883, 0x7496d52dc84436e0, 0x6a91bd2230a5d48e],
        [0xb564e69638fb7e34, 0x50f8f419b0778645, 0x095f3a8b6e07fc1a, 0x4988f6b46cff4106],
    ],
    [
        [0x768e0ea5a2c30bcf, 0xf62e4ee518b40901, 0x6a7ed39bbe02112c, 0x5255dfc95d1c0ca8],
        [0xc9046c846261de24, 0x0f89479479c18787, 0xd348e449d958bada, 0x35491d836b717f64],
        [0xe00d3120372e1922, 0x2892cadd7eb63c4f, 0x4276543ccfbfedb7, 0x5f28561407a05659],
        [0xcbfdbbdc9f5eea9a, 0x7ac048e52e4f8c86, 0xe873609650e9bea1, 0x397ccc5ef29caa6d],
        [0x6a29a62a49ec5fa2, 0xaf863dfe32cdc6ea, 0xd0c30bd23eedbb7a, 0x6431baeb99d486ab],
    ],
    [
        [0x1ddbd0fa74cd1753, 0x5c91dd494afe903b, 0x753eec059463d6cd, 0x09afe5011abd7c99],
        [0xc41e523b370033d5, 0xe50fe46b5f28650b, 0xa7d4642897e1c51c, 0x28f1cec0ec97fe7a],
        [0xacea9140d860e51a, 0xd0e2b75e2df657d9, 0xbdf19003dae43f28, 0x0cb26f0ca4624ddd],
        [0x6ee064e8c96c3454, 0xf278815f7cfd857f, 0xfbf374dc8d8535d7, 0x373bf8d7205b2684],
        [0x6fbe8b8d7abf1ef5, 0x78e4d283bad74f84, 0xe0d6f843b523605c, 0x42927ab0937f41bc],
    ],
    [
        [0x0a9754d316f59aff, 0x087c95b7a4d25020, 0xbdd47823cfdb7bca, 0x5ee3c0e954d211a4],
        [0x0afe9083b6ecb662, 0x55b9dd58708ccfa2, 0x2993577659d42636, 0x678615cf67212c3a],
        [0xeb94d87444157ddc, 0x321f871326092e6b, 0x5d23c1777e7536c6, 0x3c54727f944cca49],
        [0x4346db78de0b49eb, 0x10d5a8e7dc1975b7, 0xa95860ad9383f77f, 0x53c65020af3f5abd],
        [0xc95c9871c2a7ae31, 0xc4ce2cd38089e11d, 0x794d16acbc63bed0, 0x5f5dd3df34ccc64f],
    ],
    [
        [0xb6bcc7b4a4406a9f, 0x973bf8f23f4322ba, 0xbc1d62b7da1c9d8b, 0x09637e652e915ae0],
        [0x2d4c16107b461351, 0xcd2c7c19681f2f71, 0x66918ed255f76df4, 0x546b9e395dee0a94],
        [0x501cd280f915de1d, 0xd4bac25ae567ca63, 0x4085a657a62004d6, 0x18cb6e5d6d095911],
        [0x8de78eb619ae9cad, 0xefb2dacb8427fd6f, 0xed95f04b985f4711, 0x58782afd4a8a938b],
        [0xa24dd9cf2a8e41b9, 0x2e5cbfaaf34c7a0a, 0xeb6d9e932e4de43e, 0x072db66d8b16ae3a],
    ],
    [
        [0xde6d2e0728d565ec, 0xec342531bd0a1dbd, 0xd7505cf603ca2e8f, 0x577832f774c67cdd],
        [0xc0fe39465f0a3af2, 0x6d284f4051672f41, 0x0e6b5b50735a0c9a, 0x08c6f1218fd35bfd],
        [0xcd5305b77749240c, 0x9f10693847f87734, 0xf1d3f5a7be72a022, 0x0eba8169994d61a6],
        [0xc7d845304d464145, 0x35055256714de067, 0x5df10bf40b435190, 0x04851fb71ef33d8a],
        [0xd1e82be69ec4fed3, 0xefb6894921ac1e76, 0x9fa6e5f71288d31c, 0x2a5da7e9bf73c947],
    ],
    [
        [0x54991eef394c7d1a, 0x8b66d6c21507d073, 0x923aa87f30a79f44, 0x58a009a0ea2c67b5],
        [0xfe0199c4200060c0, 0x19c96b5e92499f48, 0x66ce0092f4c71748, 0x580d5aa604771bdf],
        [0x175eb9c4e5778f85, 0x4e6cf0009edb87f8, 0x0d0044f4e93d5858, 0x72542655258cd87a],
        [0xafd6727747e42034, 0xccdc860a7c0ceadd, 0xac57ac3301b2d32d, 0x22fc306957bf2306],
        [0x444a4aa640b21fa6, 0x2b1df4719a68c4c9, 0xe63b7ee7f14f8008, 0x47ea3e54e528ddc6],
    ],
    [
        [0x050be31e16fffaf0, 0x99e5f2543628d0b9, 0x7b0843e916f0837b, 0x2e237e775ea78f7f],
        [0xd62acc483806a7ca, 0xf5317e83cd293ee6, 0x918e6a9f7b627db4, 0x254faafb9e2c37d7],
        [0x149a7167d6b0ce6c, 0xc5af2a2f202903c7, 0x1ca23420027e98b8, 0x20efada29ea25991],
        [0x332b37e8f6c307e1, 0x239eeae97ee5db99, 0x661289b3ad905293, 0x184a55e01875861e],
        [0x58caa97b1009f1ea, 0x136c25f2fb2e7b0a, 0xa614cf26a175397f, 0x6acbe53e7aced8a5],
    ],
    [
        [0x4acff18b9b9a66d6, 0x39cd2f898e2322f4, 0x8551c6b90ef7bb83, 0x264991a53ef2e991],
        [0x321da9d3691f999a, 0xab035793b9434c39, 0x4cc8a3223da343be, 0x5078f86a7da7702a],
        [0x9e06269fb3d2c1eb, 0xa8397ea953823e41, 0x9523a3a9f9ee3b41, 0x39a8104ab4e2622b],
        [0x1c0a99f44bf5639b, 0xe73795035bcf1e63, 0x4f3fe53c4393021a, 0x35728c2b81c712a3],
        [0x7c44bad1e42c67e9, 0x5b7a2606a8612282, 0x8282eac27dbdc321, 0x41d7615f8bd97f17],
    ],
    [
        [0xaf06c474e85b13fa, 0x72e6193afc096e78, 0xe1b4d1298f4695e1, 0x233bd5884457b5a4],
        [0x655d5480b6a45cae, 0x975724cdc241eb94, 0xb441e9a7132308cf, 0x2f967109b61b2b2e],
        [0x19183161b0237c77, 0x5a61fbf0f78ea040, 0x7ddb61a224bfca79, 0x64f73e5667bde703],
        [0x5b16373596a7989b, 0xc51d5455b6dfa295, 0x1ae9a2067bf6513d, 0x3829281d031f932f],
        [0x8914d110355746d6, 0x1bcc120bb503d257, 0xeb729b51e0c39110, 0x52954070f8e0b8f4],
    ],
    [
        [0x8a44e89c0df8f1a4, 0x221b891669924d11, 0x32d5c8a466cf1323, 0x03b69267b12f4953],
        [0x2a35fad10d40b2e1, 0xbd7a9a4b77217470, 0x9755786f52ec76c7, 0x1d33c92e7d3ee174],
        [0x8fb3537ffc3fee70, 0x1e37c66c524c90b1, 0x62deb44bd05d10e5, 0x08d86c442959963e],
        [0x8abde1d28b1e170c, 0x3bddf6da1348fa53, 0x642baf29a85cdb20, 0x24194a8ccf272dee],
        [0xbe321b5fede43ea9, 0xea9f160f62b6d19b, 0xa88022f8c83bac53, 0x1c0b6f25101f49fa],
    ],
    [
        [0x7ff22e4b014bdb17, 0x7c797f02a6351a3f, 0x3a2d95bdc456a195, 0x5965df1635254bb7],
        [0x0915bd154ef0cf6d, 0xa0093ac87afa05c5, 0xe45405fac3529a15, 0x6fecddfd9ffaf803],
        [0x6df43b33f92d55e2, 0xcc1da85c94768318, 0x09ded2913dc27396, 0x6c5a8175e24da734],
        [0x7c0384b0610fee60, 0x0a6c6dc54ef62047, 0x48d4b4faa0f0b318, 0x40e211d645b6bdee],
        [0x9de337c149748d70, 0x97a6526dda4b90f4, 0x6a34dd4fa987a264, 0x42adc6f65f9df803],
    ],
    [
        [0x59c8e8a0babd987f, 0xbd29805945dacf6d, 0xb4449590423d9e65, 0x73185cb8f8642b0e],
        [0xe2d1b70e5b5d527e, 0x62c0eb4a90413894, 0x5fabf2d5b9f0cfa0, 0x1999004fd6cd12e0],
        [0xc55ec579af3b0ecd, 0x2475ae3ed15b5c36, 0xb934b63ddc6a2594, 0x4f89f26b5f08f1aa],
        [0x9db74905ca5d968a, 0x339c3c95375a0cb0, 0xba86a4226a836325, 0x12a5fbf0400a087a],
        [0x76a541a9e12a78ce, 0x368a3d002723e106, 0x48aaeba3783c045f, 0x11a3fa42d518e204],
    ],
    [
        [0x4438dfd2e2655ba0, 0x42aad7e876e2562d, 0x2bbb4d956ff1dc94, 0x2f59f158b1c60bf1],
        [0x2decc1a3bce340b3, 0x0d06c16b511c535c, 0x81112417097659b5, 0x48956231bc3a0c35],
        [0x38e168bbd8149a0e, 0x728c537a7a5f0f69, 0x3bd47dd906fccdf2, 0x2849b06e476443c4],
        [0xaf4dfd7e7cee91ed, 0x32179bd4c8ff918d, 0xf72bb99b925e9c14, 0x58d1184212a2fe71],
        [0x679735aea4e3cc61, 0xc9d4a142d6fa7b99, 0xbd5172dc768de9a6, 0x3fc33989242fa44c],
    ],
    [
        [0xcf6b8b1292be02c4, 0xa88cdbf32e124721, 0xa07d3cab7478c170, 0x04609e4a1be08e45],
        [0x8f34cedae71a4819, 0x6e6babe83c19f1e5, 0x01599a2f45d14149, 0x51a47f35ce630b8a],
        [0xc79bd2344700d97e, 0x7e017d27067288f8, 0x5d5919ae28878016, 0x011de2c7cafc96dc],
        [0x248aa4b29da00b66, 0xbb9605b25b399741, 0xd9fe89d2a797f975, 0x5505b08ca4fbe52a],
        [0x30ce28a8d31fe617, 0xf7b9c23364cedc48, 0x71ed5ca55be442dc, 0x0764417ff69a6cdf],
    ],
    [
        [0xa7fe278f6f0a6994, 0x3f3f4e413067c6bd, 0x0eb5f9a7dfee8d54, 0x1ea443addd653c9a],
        [0xd28c1082a1c94dfc, 0xe18c3819df2e71ca, 0x1277a06df6c4a335, 0x30e8242b2eb26dde],
        [0x8c611d29f8048184, 0xb539818aa40f1fdc, 0x6fd56c56cba5e12b, 0x4be93987573b6cfc],
        [0x577f28e3dbe29986, 0xd7f1f31a45690ff2, 0x0e59d224e4a050d5, 0x42b770b2264660e6],
        [0x3f4b7bb2ad4919a8, 0xbfabca120244698d, 0xf3d3f24b6e19d4a3, 0x08a27e30763aad74],
    ],
    [
        [0x1787954597b45627, 0xe11eb86626dc332f, 0xbd0933b1961ce0f9, 0x2cc5903961de4dcb],
        [0x416951e9647a4dbc, 0xd4509c9dd7c39ef7, 0x26bacd792ac5ba28, 0x47e985d487ee6e1e],
        [0xfe3a30661396ce61, 0xf99b8f839f800cae, 0x5215084ba7e08d2f, 0x2b93f9997e71be64],
        [0x68dd6d2f5c8bf1af, 0x9c04e2fad716a688, 0x24d88a999b60638a, 0x712d0469727032af],
        [0x41497c7a5098d7cd, 0xd565a8c261075033, 0x95dc585eb0520a55, 0x6bdaebef7927e6c1],
    ],
    [
        [0x509079e97615197d, 0xd8b42fc536383a40, 0x7b0b8a2fe0b1de81, 0x66c00c9738eaa31d],
        [0x9a254acb40469c50, 0xf94384942cd898fd, 0xa753e8a2d79c344b, 0x1fcfaf860b9f60ee],
        [0x4533c4652105b938, 0x1ca76b137f7ebec5, 0x29ed53c414e2cfea, 0x28b4dc5e4f2550e9],
        [0xc1cd29a04090e6aa, 0x3a501de3403e4551, 0x4747be944d427c0e, 0x472b0e17b62a901a],
        [0x4374c36741c17f72, 0xaedbc3f89d72140b, 0x5b02bfd70dc7c70e, 0x52f256eaa5ed5afc],
    ],
    [
        [0x13fef0356204b9b1, 0x95a99eeae0d0b595, 0x6cf823c3ee35009d, 0x604a77f3a748eb22],
        [0xcc2de699ab8f9364, 0x5d12dd0515ce061e, 0x1f794e2449f4cf86, 0x0b6e82f7e448979b],
        [0x3146e6470d0f3407, 0x6abcc7eaf46216a8, 0xd9953b3f0060e635, 0x08ac469169f16f69],
        [0x20f10da98739be87, 0x3424e6527173002e, 0x1125e9a4e968e2a0, 0x593ae35f24590d6e],
        [0x4e1fc5181871abfb, 0x0828c5af6f8ab045, 0x631657769cfe9848, 0x1842a0080d610897],
    ],
    [
        [0x86a18ea0c5f71312, 0xe17e795b82ebb9c9, 0x0c39493e2dc4b465, 0x1b4617ab22cbbeb1],
        [0x76f12a8b203f1854, 0x60f19cf5b0a24160, 0xf36f2d3aea11fd8b, 0x12f49e7b20d1b518],
        [0xd603dae3afb0ec37, 0x649b330696b98864, 0xe9439d14b49ae806, 0x2930f273fa05d398],
        [0xbe9ea939d7a1a68b, 0xc532f3269d540c49, 0xb477cc3429c27de9, 0x0bd3c0be6e783e92],
        [0xe30b85806a64ed51, 0xf5b23acdcafd5496, 0x303a1035429216b5, 0x58cca0bc2eaee337],
    ],
    [
        [0x2e90c362b84c142d, 0x7f657256b9397499, 0xff08bfad67c57212, 0x22f54df37e0c28d9],
        [0x76dd7ad245e792d7, 0xb328e00c00b6d58a, 0x243a3840e8d3a457, 0x4f227e82309f2af0],
        [0xbe9ece0778221fab, 0x835bc991db3ae610, 0x65b74c201e8af52a, 0x4fa65b781e4c2ed9],
        [0xa9084df3cbadcb2c, 0x285c9eb52e3372af, 0xcc596c8a18bdf3e7, 0x6168f0439fe970f7],
        [0xd6009c174b4cde76, 0xb0d80ffa0e6bca06, 0xec9851629b8410c9, 0x2ee0f0f1b7fae6d6],
    ],
    [
        [0x50f6eee511e7118a, 0x56604a8ca21a5279, 0x6c262e00e6a950a6, 0x463de84b0649f8fc],
        [0xd59a96a58b34bf8e, 0x64e527932a3924fa, 0xdbca6db6105d2a0b, 0x5fb8be949ded20fd],
        [0x4b7fbf8e2b968001, 0x6ab85010684f0d6d, 0xfbd0e70123222cf8, 0x0c2e0aa86422baeb],
        [0x682297cea73fc868, 0xc13d8acf6e42651d, 0xb78c6fe100462dc0, 0x5f8726f651ad2518],
        [0xe5d3c9aec43def38, 0x2218d9f20170bf1b, 0xf4e0b85bb58b834d, 0x51c95bf666ff8fec],
    ],
    [
        [0xfb014a62bbe8be61, 0xe04a8c7cd382a8c0, 0x2897628e731f3f63, 0x3c4a879d04291aec],
        [0x618d3988d1bad504, 0x5eab7b6335466e7c, 0xb5071e0759eaa954, 0x4e3f2713561dd6e4],
        [0x01f8852193e4a604, 0xde5033e0e902c456, 0x18d48e32822fb977, 0x1158d86cddece49c],
        [0x76ba35890a37fd2c, 0x824850b3207435e4, 0x2d3db60d5d7c7466, 0x02263730859a58ba],
        [0x1b046c0a4a78acc5, 0x085b9a95429dcedd, 0x425888a3acf85639, 0x4d439b61a3703c36],
    ],
    [
        [0x6aae25e1527868bd, 0xbb44fb43306a6324, 0xaabb6bfb28276a9b, 0x1330cb0c5d2fa075],
        [0xe6e6d0cc1698b5a5, 0x9c9b588c43e59038, 0x3bdae50355f91df7, 0x16b95b643081cb04],
        [0xaa5b3fccfef3c321, 0x36eca4571240be90, 0xa1f80aa372da950a, 0x1fb8d50108e2fb3e],
        [0x273bdfe5bc5dcc50, 0xd11bbde409d8b262, 0x83934f1a7813d75c, 0x4a53ec9735e16f61],
        [0xcaf41ae406fa21d5, 0xa486901dbce8cd86, 0xeade23e8273e2db2, 0x079ba56e1ca1d8c8],
    ],
    [
        [0xbce8e4d1e5967c68, 0xacbfac58a8bb5cd9, 0xb845db9d5ef043ec, 0x38ed6aa3cc88a95f],
        [0x6d63be3a996fc5f4, 0x3c2986cc24dd63bf, 0x2d1abd33601ee1c2, 0x2aae4dacc5a04fc3],
        [0x2f9948efd2d095b4, 0x090ba8748d569027, 0x24de0dff84192c35, 0x4d34a394da7c0ecb],
        [0x19c474c4c406aa18, 0xbc1872226e7db81b, 0x097c5c63f509110d, 0x42b103442e734014],
        [0x1794580993f5c78c, 0xa3db1ce1de6b7b12, 0xa1768185d6a3f4de, 0x48a2063c98229fda],
    ],
    [
        [0x1696456dd58f03bb, 0xb1c48be6aa9c55c2, 0xa4cf7f1a57d58467, 0x6ce4def3b2ebbdc1],
        [0x8ee4b61dadfc00e2, 0x1280dab5a69c2cd3, 0x9a76a7c5d69bf191, 0x195ce730b876d592],
        [0x75739591bdc7d5dc, 0x7da04b327ea2c948, 0x360d3e401c7fbed1, 0x63bf1167c90f8dd2],
        [0xcf267419c0dbf3c8, 0xab8fb608a22b43c3, 0x80452e14073c8b96, 0x5db879cb0bbf165c],
        [0x96a3b6e9c2a3d587, 0x8b6b4ee1407e5f39, 0x95ae0c5dd5f071ec, 0x472b50d6fb5d632e],
    ],
    [
        [0xf52b37bd9799521c, 0xbdff53c907b9adfb, 0x4d8066a06315d673, 0x3cb873e98b29b2ed],
        [0x16ff47ce679703c3, 0x061b92218fb0d794, 0xa73911ddb781380b, 0x0793192ee98e2f57],
        [0x66812783cdabe19a, 0xe8cd70773d814142, 0x6298b33d8cab5ec2, 0x3c159af2d3c00815],
        [0x35fa3c83d2f933eb, 0xfa9473b9b163fa4c, 0xca0dcaf2d805bca7, 0x1c065141b64831c3],
        [0x89c74c6abe4f3407, 0x97aef800b3b87441, 0x36c24eea0d3ee5f0, 0x23943e9e8a571aeb],
    ],
    [
        [0xd668bb3be7cbea16, 0x69a082c5bd72fd8d, 0x6b417a2fd7bcf682, 0x3e9bf606619c174b],
        [0xa9e9e41de5c6b440, 0x877d3fd3428aa4b1, 0xbe0e6d05d6d9a465, 0x480648a70c24e511],
        [0x317deabfd3e044f1, 0xd5a05ccedf764b01, 0xeb1481dbda3abb1c, 0x4324bdda4691820d],
        [0x9cf74fb851384641, 0x5629d9a5b547de9a, 0x7bb6c0a4e7f134e8, 0x6f2915f09c70fb22],
        [0x91d5b35713ff215b, 0xf63db619532cf272, 0x100a850dff27eb37, 0x5f6d84cceaa1d3d3],
    ],
    [
        [0x9a6e3322ae63a62b, 0x67c2b7fe1bb8558e, 0x6ea017df3d2ebec7, 0x2fcbf6ae9d4cdb27],
        [0x9b8fd34311bcff9c, 0x26d79dfc305da5da, 0xcd00567331a72b4e, 0x408c45f73c4165b6],
        [0x14133324e1505a5e, 0x943448ad0efea1c6, 0xf1ff10669a69189d, 0x67799ccf850146c5],
        [0xd93afdad53ac9d4d, 0x4f47f4628de8c011, 0xd2a65bf7694212c0, 0x51ec52ac5329ecfe],
        [0x8358204ee3b1f8fb, 0x75d3729d057e78ad, 0xdcf955a5364a868b, 0x006e70e25eb8093b],
    ],
    [
        [0x84c60d61f877090f, 0xb16f616032c3a8c2, 0xfd516d212da55c3b, 0x50d01794d6f55e78],
        [0x7094f0563c31755b, 0xe1d434d5a394e045, 0x5fcd729af8fa1716, 0x1f74c3f88a37452f],
        [0xfce6ef6cd87fddce, 0x186baca856104373, 0xa598be6e60a580aa, 0x019487e8c5dbb68a],
        [0xc47bbe5658e09ab8, 0x107dacce78ee4f85, 0x015350f39b5b2185, 0x4832ef55d38c938a],
        [0x8add6884763cd068, 0xba80099912a56e9e, 0x0baa1c5dfb59ff29, 0x4a85d06c39d9c8c0],
    ],
    [
        [0x38be26231ba3755b, 0x6528420430bcc573, 0x5eb63124cc93220a, 0x41488ae48b74da50],
        [0x3e5060fe8595e30d, 0xc63d1d52941fbab7, 0xa07247349ae1aa49, 0x21b5d82ddd050ecc],
        [0x5f02f0f4d173067a, 0xc9ff93a61d75f439, 0xdc4cb6b754f15da0, 0x5c9b5273d97bbb50],
        [0x51e0b5c55b7a247c, 0x2119ba043eb6ffed, 0x7a8c2bf9ef2f7c4a, 0x0a062f37f718f4c3],
        [0x6ed08086b8dace0e, 0x13806df7a17df30e, 0xd5b09f5fdaba71bf, 0x159f9276bd128ed2],
    ],
    [
        [0x0d6a883b83370198, 0x2dd078820337ecec, 0xe819581c1f2ba641, 0x397cf7ac45224459],
        [0x365f36d6b8acb385, 0xf85525d0dde7a8e7, 0xb6a681a4134ce1a7, 0x32e654ddc435855d],
        [0x44516254939edd3e, 0x00de626fa216bc30, 0x2f744d5e093ea7f1, 0x07245288af44bddd],
        [0xec9af41d62fe128e, 0x45563158c8d47c75, 0x8255902e3a0efd2e, 0x61266cbaef88498a],
        [0x9ea07712048c9d2d, 0x484c7eee1d0800df, 0x89ecb982dc3d2fab, 0x73157756a167275b],
    ],
    [
        [0x6996bb6a7b2b5c53, 0xdad7fc9ae30f1f05, 0x5c0504c624b23570, 0x0c0b409aaa3a87cf],
        [0x4c963a784e06c554, 0x2f4f3249b711090a, 0xc32ff8d8d3174bcc, 0x03801ea9c955bbc5],
        [0xb4dbe811f8b13956, 0x15201ac3d7ae406e, 0xa4e614f7e8780b3b, 0x17690270da56baeb],
        [0xc28aa089775dcf38, 0x3ac790e8eb07c153, 0x8e319418659d4bd3, 0x0779f987f90f1c4f],
        [0xb1a9fe1d2a391bfd, 0x42a3288f32a5d5ff, 0xa5946f15f2fb134d, 0x2f74df84cb03f57c],
    ],
    [
        [0xd79359c91f32aac2, 0x86674531648061bb, 0x5078e68938a27c03, 0x6ddaa41db23ce040],
        [0x1f325ac32b8ba72c, 0xf3066a07f987de09, 0x2c5e457337342795, 0x2f49ab87e23a5d39],
        [0xf3b16c07b02dabb4, 0x2b0ab3e07dda2a0d, 0xa3b055be496dbdf8, 0x0efc38d20700d5b5],
        [0x9280145a1dc7cfc9, 0x853dddd00734b01f, 0x1b977c0f544cb9af, 0x6f5ab923c9d18fd4],
        [0xe01c66b108265b8b, 0xbdbea9801a09fa7e, 0x29cff37a2055f827, 0x0903ed0675157f66],
    ],
    [
        [0x3a1509045d2aaf8b, 0xc52f0441de841978, 0x34a15bc34c228500, 0x700f5c0c5990d424],
        [0x329b2662188c2cb8, 0xfde5c90a3c5154a4, 0xf36abed91ee25dc7, 0x6a0e3381e15190ac],
        [0xab9f28646d1d7181, 0xaa9ff3709c64a080, 0xc61e7a748d936388, 0x4757ddbab350afd9],
        [0x49290cd45897b2a7, 0x4a98f32c04eaa80c, 0x9c08d557dfd5d105, 0x60f9d0c0c463bffe],
        [0x3575137b695e5789, 0xb32fd1f76a7878fd, 0x5e6100d19258c915, 0x0720379ef288498c],
    ],
    [
        [0x1d546c7865407e3c, 0x15ce0814a9edee3b, 0xff8e9293803aff7f, 0x2265c46e022a5ef8],
        [0xaad3603084cfb48a, 0x70a8b1957d362ce6, 0x0a2d173e0ce48508, 0x1206dc6f2948499c],
        [0xdf57486dc70786c2, 0x55c4bdaa743f8af7, 0xf6c09dd43d54aa97, 0x3497b1b2410e8b30],
        [0x3ee03985cab3ec06, 0xe124c7752dbe38d8, 0x9e8a475140bc3991, 0x1ac1322d723d7d2c],
        [0x7d67bb5de77df230, 0x90e61d21fdaf4d35, 0x52bb71fe9246ed83, 0x06d7e810be676181],
    ],
    [
        [0x2c7f295f3949436f, 0xf1900ef4b9365632, 0xaf868ae52affaa93, 0x0ee137d56d3c1f10],
        [0xb1b87d443b54a76a, 0xf3c784d2ab0efe4f, 0x0c16ab0292cbda61, 0x21da6fd7aaca1d90],
        [0xfb31114e0e67285d, 0x50a88831ff9f9073, 0xda79593314f41f00, 0x1db1c07b4c58b4ba],
        [0x2fddba0789d6a473, 0x82c3b2fee5a63a86, 0x114192ac64c52260, 0x5898c5429b336972],
        [0x4dbbae22e6db34e8, 0xfdb885dc1916c988, 0xae1a7da096eb5b0f, 0x6ce149f5c89369cb],
    ],
    [
        [0x4c6021255d1de0d5, 0xd4be6ef3ba7b16e0, 0xddecc9229f9bfccf, 0x312b1c75d7428aa4],
        [0x40069c8c3cf236ee, 0xdde9275c3589a88b, 0xb49ae7ac6102c229, 0x08ac2c7ded2c05dd],
        [0x6a504a3e5b05d76e, 0x32e6b2d25e69f3d5, 0x1d6453669335fba2, 0x1725748fd880aabb],
        [0x558b89a5db585558, 0xdd1487e334ab8609, 0x24d9a3854e5d49e3, 0x248998a735f44fc5],
        [0xff6aa6eceef4656e, 0xf3cf35a5b2ef9148, 0x820a24f5106403e6, 0x51327888436d6fa1],
    ],
    [
        [0x7d643d9320c4ec43, 0x756786c8718d30a8, 0xb5d7676414246a40, 0x0c8b5a14aa194279],
        [0x4f4cd861069b2481, 0x2ee384cafad6de95, 0x036040dde9349b3f, 0x4dc96baa6c646df7],
        [0xaf5711ce87be65a1, 0x0294bad752b6c7f9, 0x6ecb439d05adf0b7, 0x718209ea4f77c3f7],
        [0xb35398a0c56265b0, 0xcd523ec21cf43d38, 0xa343c723af04d126, 0x639a0d20110526ea],
        [0xd20cd24cb8e67206, 0xd7a9a4e37d4def67, 0x5c4cb4ddbd2e619b, 0x2532f06a0066838b],
    ],
    [
        [0xa2d25523900917c0, 0x00ba7470d0168d65, 0xac8bd69265d4ce6a, 0x6b6d6b0887e56beb],
        [0x5f45ac52ac31e8cd, 0x2a424cc46d4ec08b, 0xbb0a371937ccfc30, 0x49f013fd9c831d3b],
        [0x42eb456d57295fe8, 0xb5c86f3fe92be4f8, 0x3ffcf5cb63264101, 0x394e2a96c15cfa8f],
        [0xc256830a359a789f, 0x31f1251f47a8446d, 0x6719998182d6b7f4, 0x1ac743d177683ccc],
        [0xbb9fb325f3b4b9f4, 0xa7eb3284f044cb5d, 0x18bcd2cc36ccff80, 0x3e3e342fba7c1490],
    ],
    [
        [0x205de91ea9322c8a, 0x7329ac022a49b127, 0xb4e9d9ef258e17f2, 0x3acc235e3731adaf],
        [0x7fe22a479aaad604, 0xb9942121bfbd43ff, 0x7f12bf3316628eb8, 0x608afd9af0e5cfe0],
        [0x2b600834b186aac4, 0xac86faefc74731fd, 0xf3a74ed5f7ac9892, 0x0ff89b10a1c9e65e],
        [0xb90e5cbabae26292, 0xa8908e38e24a6142, 0xbf59399c6d53490f, 0x52f4e44f6d3341b5],
        [0x727e57d07720575e, 0x03cae780df15bf46, 0x3fb64102547ca12c, 0x38ee391b76fd7389],
    ],
    [
        [0x359c041bcf6d9b80, 0x286f3f00e82b701a, 0x3e7bec277a3cb39f, 0x3aea1da1370f5f1a],
        [0xd4038a1fef06f0d9, 0x27114f3d00a155fc, 0x5f26001543e0caaa, 0x21527c01d8037ea8],
        [0xef0521f72a45ca71, 0x18c5aaafd1d84329, 0x700a6d66c7178bab, 0x60fc95ccdb1cf5a2],
        [0x6c2cd1730ed46c1a, 0x5fbc16bcc6d24beb, 0x4bf7d02da51f2d33, 0x5ab6a484d0d3ecfd],
        [0x9f899b54ad0bb82b, 0xe8c7b83293358e0b, 0x3d829d55ef0dfad8, 0x4ea32259f9226d6e],
    ],
    [
        [0x13c95dfeb07da075, 0x6764df75505e02e7, 0x78388224ad8c50eb, 0x05b6e5b66f488a03],
        [0xbacc151872e69e19, 0x4755971130c2d1b9, 0xd9e2c9d26e6b2b80, 0x31712374e5e6154a],
        [0x9b1b8128a512646c, 0x2a986493bf227e5a, 0xd2fbf8b171f7c535, 0x1e579ccdcfed1c91],
        [0x552d88120ad535d0, 0x6ac647a25f590752, 0x170331b1f5fa7317, 0x2a2acebc6ea9b7b1],
        [0xed7475e849d74e32, 0x0524d2d3514b284a, 0x292e66fce38393f3, 0x49153077b745ebc3],
    ],
    [
        [0x0ce8d89e3a997f14, 0x1dcacc7a8ded4dfb, 0xf8c5f072049c5901, 0x5375d9a81513c847],
        [0xf7e24f59f420dd45, 0xfa79c35db080a09e, 0x21c6c1ba05116256, 0x435d971e1eb8e448],
        [0xec4eab08149fd5d9, 0xce8f43a87505bc82, 0x1dad28f1caf856e5, 0x58503b3a94f09694],
        [0xfd6989a34f91dba1, 0x548c24552e1ce79b, 0x3f088fff6afe6998, 0x3875898530fddee9],
        [0x0c13b6105f1e3daf, 0xe2753db62df5a0a7, 0x69ba13e029af8a40, 0x19380c553178569b],
    ],
    [
        [0xc9addc7ccbcfcbfd, 0x447ea35fe771de55, 0x58db79cde4b98711, 0x1c00372679acb246],
        [0x9e1508c8fc6b5d80, 0x30ae60032ff2e463, 0xbbfdb5d787f2d588, 0x6b5dbfea22d86bd8],
        [0xd26b3e803201e641, 0xcd0fe5ffa9d88eb0, 0x4386a117a214e6e7, 0x4607d1076850ad70],
        [0xadc2a55de5a47db6, 0x4262bd48a3003e35, 0x227f53bbb878dcf2, 0x0f91e67891be0164],
        [0x608dc7889d9f2e5b, 0xc8300255f65f994e, 0x5c410afd195a0646, 0x45996205840c4b3d],
    ],
    [
        [0x54e12835352fc115, 0x06a736e0ab546d44, 0x44dfb36a1ec2d0e6, 0x3ead3e9e499d91be],
        [0xcee0cb445eb4b307, 0xa695d767a26bfa59, 0xc9e034f64b1d9a36, 0x1598c26031f70fee],
        [0x55c78922b871b03a, 0x60b921721763d410, 0x9e3b439093440f1a, 0x1cc0c0f8eaffe378],
        [0xd48fb42893150047, 0x569bc88162ad297e, 0x5e911c7817d88968, 0x48703d4aa9bf7adc],
        [0xc34a07c3a577fc78, 0xd552513affaa6ab9, 0x60c8b0f998419159, 0x5593e8d4c35eb09c],
    ],
    [
        [0x7a041ac18c5de850, 0xf2330f172cd4ed00, 0xe0a64a0cd44eb759, 0x1d0edcbd6dcddf3a],
        [0xfd6a03f4c17434e3, 0x6b4aeae25cf32cb1, 0xfaa80772e382ba08, 0x328371fd8f5642af],
        [0xd5724ca40c29cc72, 0x32defcd29c70d1b1, 0xd6d93c13b7f08bb9, 0x37941017b7862ded],
        [0xaddfc01620ef0100, 0x63d4b0a58522ff95, 0x9b2b97163b5ce65d, 0x10c59d50cb8d8d93],
        [0x47360615dda11212, 0xb0b6b9061d133261, 0x9b64551c7ceaee9f, 0x0d5b533b43b0b27d],
    ],
    [
        [0x6afec469adc3f468, 0x90b697a161936075, 0x030f9dbe7811775d, 0x636375e8e3a62551],
        [0xe347e4bca730cd94, 0x4fe39ddbd74337d8, 0x98611664a8b64cbc, 0x16ff3d1de7193f4b],
        [0xaf52d064877a4eab, 0x564f9f44f202e18b, 0xdd35e56a7c7b2497, 0x1cc95775b2716b3c],
        [0xb84136c910ba1594, 0x20846e98e02eef2d, 0x829b7229f6b34c50, 0x36daf37534506831],
        [0x485b414f5f605e5a, 0x998c62b695a83078, 0x783ef9e5131db78a, 0x61a68e2455dce0f6],
    ],
    [
        [0x96fc4210069d2a22, 0x32fe393d86a33419, 0xede9f64b5050371c, 0x12b11dd703fc60f2],
        [0x1040e411c2a823c9, 0xb5eb98ea795b87bb, 0xe8b83ca24a6f9412, 0x27bf254291de0508],
        [0x8910ef4e0ff34b2a, 0xb2e872dde27245f0, 0x5654e48e4b395290, 0x35f4aa5fe745e6e6],
        [0xb89b3a3de13b1911, 0x4778f957b6024162, 0xcc5914748a55d3f6, 0x24fdbbb549e57cbc],
        [0x997bbad58557a29f, 0xe784c29e5c2f1d15, 0x684ea68c47390d13, 0x22485592115c7396],
    ],
    [
        [0x69140919a33d02f6, 0x418adf12317d3788, 0x30a66e540f7a878f, 0x2056b61a624a8560],
        [0x242096fccc6b1601, 0x3bb3f59d13c3570b, 0xe80f05da1af77469, 0x38df7ffa7f9be7b2],
        [0x37aa42b430e35637, 0xe4fd1abd978480c6, 0x1d9eebea32d2c9ab, 0x35b15b6c4c7bf09e],
        [0x515f8f8667d06763, 0x9a8199a11950ceb2, 0x66dcf53f0d0cd7e6, 0x255267e1ead997f1],
        [0x69e1bf5d88a85020, 0xff5dddea1238c4db, 0x3ee244b3ba4e49f9, 0x3fd6bd225026a467],
    ],
];
