//! Tables and polynomial data for the 2^x / e^r reduction kernel.
//!
//! T1[i] approximates 2^(i/64) and T2[i] approximates 2^(i/2^12), each as a
//! double-double with |h + l - 2^(i/2^k)| < 2^-107. Q1 is a degree-4
//! minimax polynomial for exp on [-0.000130273, 0.000130273] with absolute
//! error < 2^-74.346 (Sollya); Q2 carries the Taylor coefficients 1/k! with
//! double-double heads for the accurate step.

pub(crate) static T1: [[u64; 2]; 64] = [
    [0x3ff0000000000000, 0x0000000000000000],
    [0x3ff02c9a3e778061, 0xbc719083535b085d],
    [0x3ff059b0d3158574, 0x3c8d73e2a475b465],
    [0x3ff0874518759bc8, 0x3c6186be4bb284ff],
    [0x3ff0b5586cf9890f, 0x3c98a62e4adc610b],
    [0x3ff0e3ec32d3d1a2, 0x3c403a1727c57b53],
    [0x3ff11301d0125b51, 0xbc96c51039449b3a],
    [0x3ff1429aaea92de0, 0xbc932fbf9af1369e],
    [0x3ff172b83c7d517b, 0xbc819041b9d78a76],
    [0x3ff1a35beb6fcb75, 0x3c8e5b4c7b4968e4],
    [0x3ff1d4873168b9aa, 0x3c9e016e00a2643c],
    [0x3ff2063b88628cd6, 0x3c8dc775814a8495],
    [0x3ff2387a6e756238, 0x3c99b07eb6c70573],
    [0x3ff26b4565e27cdd, 0x3c82bd339940e9d9],
    [0x3ff29e9df51fdee1, 0x3c8612e8afad1255],
    [0x3ff2d285a6e4030b, 0x3c90024754db41d5],
    [0x3ff306fe0a31b715, 0x3c86f46ad23182e4],
    [0x3ff33c08b26416ff, 0x3c932721843659a6],
    [0x3ff371a7373aa9cb, 0xbc963aeabf42eae2],
    [0x3ff3a7db34e59ff7, 0xbc75e436d661f5e3],
    [0x3ff3dea64c123422, 0x3c8ada0911f09ebc],
    [0x3ff4160a21f72e2a, 0xbc5ef3691c309278],
    [0x3ff44e086061892d, 0x3c489b7a04ef80d0],
    [0x3ff486a2b5c13cd0, 0x3c73c1a3b69062f0],
    [0x3ff4bfdad5362a27, 0x3c7d4397afec42e2],
    [0x3ff4f9b2769d2ca7, 0xbc94b309d25957e3],
    [0x3ff5342b569d4f82, 0xbc807abe1db13cad],
    [0x3ff56f4736b527da, 0x3c99bb2c011d93ad],
    [0x3ff5ab07dd485429, 0x3c96324c054647ad],
    [0x3ff5e76f15ad2148, 0x3c9ba6f93080e65e],
    [0x3ff6247eb03a5585, 0xbc9383c17e40b497],
    [0x3ff6623882552225, 0xbc9bb60987591c34],
    [0x3ff6a09e667f3bcd, 0xbc9bdd3413b26456],
    [0x3ff6dfb23c651a2f, 0xbc6bbe3a683c88ab],
    [0x3ff71f75e8ec5f74, 0xbc816e4786887a99],
    [0x3ff75feb564267c9, 0xbc90245957316dd3],
    [0x3ff7a11473eb0187, 0xbc841577ee04992f],
    [0x3ff7e2f336cf4e62, 0x3c705d02ba15797e],
    [0x3ff82589994cce13, 0xbc9d4c1dd41532d8],
    [0x3ff868d99b4492ed, 0xbc9fc6f89bd4f6ba],
    [0x3ff8ace5422aa0db, 0x3c96e9f156864b27],
    [0x3ff8f1ae99157736, 0x3c85cc13a2e3976c],
    [0x3ff93737b0cdc5e5, 0xbc675fc781b57ebc],
    [0x3ff97d829fde4e50, 0xbc9d185b7c1b85d1],
    [0x3ff9c49182a3f090, 0x3c7c7c46b071f2be],
    [0x3ffa0c667b5de565, 0xbc9359495d1cd533],
    [0x3ffa5503b23e255d, 0xbc9d2f6edb8d41e1],
    [0x3ffa9e6b5579fdbf, 0x3c90fac90ef7fd31],
    [0x3ffae89f995ad3ad, 0x3c97a1cd345dcc81],
    [0x3ffb33a2b84f15fb, 0xbc62805e3084d708],
    [0x3ffb7f76f2fb5e47, 0xbc75584f7e54ac3b],
    [0x3ffbcc1e904bc1d2, 0x3c823dd07a2d9e84],
    [0x3ffc199bdd85529c, 0x3c811065895048dd],
    [0x3ffc67f12e57d14b, 0x3c92884dff483cad],
    [0x3ffcb720dcef9069, 0x3c7503cbd1e949db],
    [0x3ffd072d4a07897c, 0xbc9cbc3743797a9c],
    [0x3ffd5818dcfba487, 0x3c82ed02d75b3707],
    [0x3ffda9e603db3285, 0x3c9c2300696db532],
    [0x3ffdfc97337b9b5f, 0xbc91a5cd4f184b5c],
    [0x3ffe502ee78b3ff6, 0x3c839e8980a9cc8f],
    [0x3ffea4afa2a490da, 0xbc9e9c23179c2893],
    [0x3ffefa1bee615a27, 0x3c9dc7f486a4b6b0],
    [0x3fff50765b6e4540, 0x3c99d3e12dd8a18b],
    [0x3fffa7c1819e90d8, 0x3c874853f3a5931e],
];

pub(crate) static T2: [[u64; 2]; 64] = [
    [0x3ff0000000000000, 0x0000000000000000],
    [0x3ff000b175effdc7, 0x3c9ae8e38c59c72a],
    [0x3ff00162f3904052, 0xbc57b5d0d58ea8f4],
    [0x3ff0021478e11ce6, 0x3c94115cb6b16a8e],
    [0x3ff002c605e2e8cf, 0xbc8d7c96f201bb2f],
    [0x3ff003779a95f959, 0x3c984711d4c35e9f],
    [0x3ff0042936faa3d8, 0xbc80484245243777],
    [0x3ff004dadb113da0, 0xbc94b237da2025f9],
    [0x3ff0058c86da1c0a, 0xbc75e00e62d6b30d],
    [0x3ff0063e3a559473, 0x3c9a1d6cedbb9481],
    [0x3ff006eff583fc3d, 0xbc94acf197a00142],
    [0x3ff007a1b865a8ca, 0xbc6eaf2ea42391a5],
    [0x3ff0085382faef83, 0x3c7da93f90835f75],
    [0x3ff00905554425d4, 0xbc86a79084ab093c],
    [0x3ff009b72f41a12b, 0x3c986364f8fbe8f8],
    [0x3ff00a6910f3b6fd, 0xbc882e8e14e3110e],
    [0x3ff00b1afa5abcbf, 0xbc84f6b2a7609f71],
    [0x3ff00bcceb7707ec, 0xbc7e1a258ea8f71b],
    [0x3ff00c7ee448ee02, 0x3c74362ca5bc26f1],
    [0x3ff00d30e4d0c483, 0x3c9095a56c919d02],
    [0x3ff00de2ed0ee0f5, 0xbc6406ac4e81a645],
    [0x3ff00e94fd0398e0, 0x3c9b5a6902767e09],
    [0x3ff00f4714af41d3, 0xbc991b2060859321],
    [0x3ff00ff93412315c, 0x3c8427068ab22306],
    [0x3ff010ab5b2cbd11, 0x3c9c1d0660524e08],
    [0x3ff0115d89ff3a8b, 0xbc9e7bdfb3204be8],
    [0x3ff0120fc089ff63, 0x3c8843aa8b9cbbc6],
    [0x3ff012c1fecd613b, 0xbc734104ee7edae9],
    [0x3ff0137444c9b5b5, 0xbc72b6aeb6176892],
    [0x3ff01426927f5278, 0x3c7a8cd33b8a1bb3],
    [0x3ff014d8e7ee8d2f, 0x3c72edc08e5da99a],
    [0x3ff0158b4517bb88, 0x3c857ba2dc7e0c73],
    [0x3ff0163da9fb3335, 0x3c9b61299ab8cdb7],
    [0x3ff016f0169949ed, 0xbc990565902c5f44],
    [0x3ff017a28af25567, 0x3c870fc41c5c2d53],
    [0x3ff018550706ab62, 0x3c94b9a6e145d76c],
    [0x3ff019078ad6a19f, 0xbc7008eff5142bf9],
    [0x3ff019ba16628de2, 0xbc977669f033c7de],
    [0x3ff01a6ca9aac5f3, 0xbc909bb78eeead0a],
    [0x3ff01b1f44af9f9e, 0x3c9371231477ece5],
    [0x3ff01bd1e77170b4, 0x3c75e7626621eb5b],
    [0x3ff01c8491f08f08, 0xbc9bc72b100828a5],
    [0x3ff01d37442d5070, 0xbc6ce39cbbab8bbe],
    [0x3ff01de9fe280ac8, 0x3c816996709da2e2],
    [0x3ff01e9cbfe113ef, 0xbc8c11f5239bf535],
    [0x3ff01f4f8958c1c6, 0x3c8e1d4eb5edc6b3],
    [0x3ff020025a8f6a35, 0xbc9afb99946ee3f0],
    [0x3ff020b533856324, 0xbc98f06d8a148a32],
    [0x3ff02168143b0281, 0xbc82bf310fc54eb6],
    [0x3ff0221afcb09e3e, 0xbc9c95a035eb4175],
    [0x3ff022cdece68c4f, 0xbc9491793e46834d],
    [0x3ff02380e4dd22ad, 0xbc73e8d0d9c49091],
    [0x3ff02433e494b755, 0xbc9314aa16278aa3],
    [0x3ff024e6ec0da046, 0x3c848daf888e9651],
    [0x3ff02599fb483385, 0x3c856dc8046821f4],
    [0x3ff0264d1244c719, 0x3c945b42356b9d47],
    [0x3ff027003103b10e, 0xbc7082ef51b61d7e],
    [0x3ff027b357854772, 0x3c72106ed0920a34],
    [0x3ff0286685c9e059, 0xbc9fd4cf26ea5d0f],
    [0x3ff02919bbd1d1d8, 0xbc909f8775e78084],
    [0x3ff029ccf99d720a, 0x3c564cbba902ca27],
    [0x3ff02a803f2d170d, 0x3c94383ef231d207],
    [0x3ff02b338c811703, 0x3c94a47a505b3a47],
    [0x3ff02be6e199c811, 0x3c9e47120223467f],
];

pub(crate) static Q1: [u64; 5] = [
    0x3ff0000000000000, 0x3ff0000000000000, 0x3fe0000000000000,
    0x3fc5555555995d37, 0x3fa55555558489dc,
];

/// Taylor 1/k! for k = 2..=6, (h, l) pairs; l = 0 where a double is enough.
pub(crate) static Q2: [[u64; 2]; 5] = [
    [0x3fe0000000000000, 0x0000000000000000], // 1/2
    [0x3fc5555555555555, 0x3c65555555555555], // 1/6
    [0x3fa5555555555555, 0x3c45555555555555], // 1/24
    [0x3f81111111111111, 0x3c01111111111111], // 1/120
    [0x3f56c16c16c16c17, 0xbbef49f49f49f49f], // 1/720
];

// ln(2)/2^12 split in three doubles: H + M + L accurate to ~2^-165.
pub(crate) const LOG2_12H: u64 = 0x3f262e42fefa39ef;
pub(crate) const LOG2_12M: u64 = 0x3bbabc9e3b39803f;
pub(crate) const LOG2_12L: u64 = 0x3847b57a079a1934;

// 2^12/ln(2)
pub(crate) const INVLOG2_12: u64 = 0x40b71547652b82fe;

// ln(2) split in three doubles.
pub(crate) const LN2H: u64 = 0x3fe62e42fefa39ef;
pub(crate) const LN2M: u64 = 0x3c7abc9e3b39803f;
pub(crate) const LN2L: u64 = 0x3907b57a079a1934;

// ln(10) split in three doubles.
pub(crate) const LN10H: u64 = 0x40026bb1bbb55516;
pub(crate) const LN10M: u64 = 0xbcaf48ad494ea3e9;
pub(crate) const LN10L: u64 = 0xb949ebae3ae0260c;
