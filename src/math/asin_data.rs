//! Tables and fixed-point data for binary64 asin.
//!
//! S[i] = floor(2^63 * sin(pi*i/128)) and SH[i] the same value scaled by
//! 2^6 and reduced mod 2^64, indexing the quarter-circle in 64 steps.
//! A (2^64 scale) and B (2^84 scale, coefficients and evaluation both
//! truncated toward zero so the sum is a lower bound) are the Taylor tails
//! of asin on the residual interval; PB/PCH the 128-bit odd series of
//! asin(x) - x used by the accurate path, and S2[i] = round(2^128 *
//! sin(pi*(i+1)/128)) its breakpoint table. Generated offline.

pub(crate) static S: [u64; 65] = [
    0x0000000000000000, 0x03242abef46ccfbf, 0x0647d97c437604f9, 0x096a9049670cfae6,
    0x0c8bd35e14da15f0, 0x0fab272b54b9871a, 0x12c8106e8e613a22, 0x15e214448b3fc654,
    0x18f8b83c69a60ab6, 0x1c0b826a7e4f62fc, 0x1f19f97b215f1aaf, 0x2223a4c563eceec1,
    0x25280c5dab3e0b51, 0x2826b9282ecc0286, 0x2b1f34eb563fb9fc, 0x2e110a61f48b3d5d,
    0x30fbc54d5d52c5a3, 0x33def28751db145b, 0x36ba2013c2b98056, 0x398cdd326388bc2d,
    0x3c56ba700dec763c, 0x3f1749b7f13573f6, 0x41ce1e648bffb65a, 0x447acd506d2c8a10,
    0x471cece6b9a321b2, 0x49b41533744b7aa2, 0x4c3fdff385c0d384, 0x4ebfe8a48142e4f1,
    0x5133cc9424775860, 0x539b2aef8f97a44f, 0x55f5a4d233b27e8a, 0x5842dd5474b37b6d,
    0x5a827999fcef3242, 0x5cb420dfbffe590d, 0x5ed77c89aabebb78, 0x60ec382ffe5db748,
    0x62f201ac545d02d3, 0x64e88926498fed3d, 0x66cf811fce1d02cf, 0x68a69e81189e0776,
    0x6a6d98a43a868c0c, 0x6c2429605407fe6d, 0x6dca0d1465b8f643, 0x6f5f02b1be54a67d,
    0x70e2cbc602f6c348, 0x72552c84d047d3da, 0x73b5ebd0f31dcbc3, 0x7504d3453724e6b1,
    0x7641af3cca3518a2, 0x776c4edb3308f183, 0x78848413da1b92fe, 0x798a23b1238447ba,
    0x7a7d055b18b76976, 0x7b5d039da1258cf4, 0x7c29fbee48c35ca9, 0x7ce3ceb193962314,
    0x7d8a5f3fdd72c0ab, 0x7e1d93e9c52ea4d5, 0x7e9d55fc22945a85, 0x7f0991c3867f4d1e,
    0x7f62368f44949678, 0x7fa736b40620e854, 0x7fd8878de5b5f78e, 0x7ff62182133432ec,
    0x7fffffffffffffff,
];

pub(crate) static SH: [u64; 65] = [
    0x0000000000000000, 0xc90aafbd1b33efca, 0x91f65f10dd813e6f, 0x5aa41259c33eb998,
    0x22f4d78536857c3b, 0xeac9cad52e61c68a, 0xb2041ba3984e8898, 0x78851122cff19532,
    0x3e2e0f1a6982ad93, 0x02e09a9f93d8bf28, 0xc67e5ec857c6abd2, 0x88e93158fb3bb04a,
    0x4a03176acf82d45b, 0x09ae4a0bb300a193, 0xc7cd3ad58fee7f08, 0x8442987d22cf576a,
    0x3ef1535754b168d3, 0xf7bca1d476c516db, 0xae8804f0ae6015b3, 0x63374c98e22f0b43,
    0x15ae9c037b1d8f07, 0xc5d26dfc4d5cfda2, 0x73879922ffed9698, 0x1eb3541b4b228437,
    0xc73b39ae68c86c97, 0x6d054cdd12dea896, 0x0ff7fce17034e103, 0xaffa292050b93c7c,
    0x4cf325091dd61807, 0xe6cabbe3e5e913c3, 0x7d69348cec9fa2a3, 0x10b7551d2cdedb5d,
    0xa09e667f3bcc908b, 0x2d0837efff964354, 0xb5df226aafaede16, 0x3b0e0bff976dd218,
    0xbc806b151740b4e8, 0x3a22499263fb4f50, 0xb3e047f38740b3c4, 0x29a7a0462781ddaf,
    0x9b66290ea1a3033f, 0x090a581501ff9b65, 0x728345196e3d90e6, 0xd7c0ac6f95299f69,
    0x38b2f180bdb0d23f, 0x954b213411f4f682, 0xed7af43cc772f0c2, 0x4134d14dc939ac43,
    0x906bcf328d4628b0, 0xdb13b6ccc23c60f1, 0x212104f686e4bfad, 0x6288ec48e111ee95,
    0x9f4156c62dda5d83, 0xd740e76849633d06, 0x0a7efb9230d72a59, 0x38f3ac64e588c509,
    0x6297cff75cb02ac4, 0x8764fa714ba93565, 0xa7557f08a516a17d, 0xc26470e19fd347b2,
    0xd88da3d125259e08, 0xe9cdad01883a1522, 0xf621e3796d7de3a8, 0xfd886084cd0cbb2b,
    0x0000000000000000,
];

pub(crate) static A: [u64; 4] = [
    0x002aaaaaaaaaaaaa, 0x0000133333333344,
    0x0000000b6db6d69d, 0x0000000007c7aa6f,
];

pub(crate) static B: [u64; 5] = [
    0xaaaaaaaaaaaaaaaa, 0x0004cccccccccccc,
    0x0000002db6db6db6, 0x0000000001f1c71c,
    0x00000000000016e8,
];

pub(crate) static CH: [u64; 4] = [
    0x404ffb77e06e54aa, 0xc043b200d87cc0fe,
    0x40379457faf679e3, 0xc01dc7d5a91dfb7e,
];

pub(crate) static PB: [u64; 4] = [
    0x5ba2e8ba2e8ad9b7, 0x0004713b13b29079,
    0x000000393331e196, 0x0000000002f5c315,
];

pub(crate) static PCH: [u128; 4] = [
    0x0002aaaa_aaaaaaaa_aaaaaaaa_aaaaaaa5,
    0x00000013_33333333_33333333_33333484,
    0x00000000_00b6db6d_b6db6db6_db6da950,
    0x00000000_000007c7_1c71c71c_71c76217,
];

pub(crate) static S2: [u128; 63] = [
    0x0648557d_e8d99f7e_4e29cf6e_5fed0679,
    0x0c8fb2f8_86ec09f3_76a17954_b2b7c517,
    0x12d52092_ce19f5cc_beeeae81_29a786b9,
    0x1917a6bc_29b42be1_d8e72d91_2977ee71,
    0x1f564e56_a9730e34_4e08e535_cadaf147,
    0x259020dd_1cc27444_c002a268_4781f080,
    0x2bc42889_167f8ca9_8ffbbcee_d62c7c43,
    0x31f17078_d34c156c_97323003_93f33614,
    0x381704d4_fc9ec5f9_43af186b_79b2a0f3,
    0x3e33f2f6_42be355e_90887712_e9dc9663,
    0x4447498a_c7d9dd82_4c20ab7a_a99a2183,
    0x4a5018bb_567c16a2_d725d3b9_ed35fbaa,
    0x504d7250_5d98050c_97c4afa2_5181e605,
    0x563e69d6_ac7f73f8_408fca9c_c277fc1f,
    0x5c2214c3_e9167abb_4e61f79b_3a36f1dc,
    0x61f78a9a_baa58b46_98916152_cf7eee1c,
    0x67bde50e_a3b628b6_d409485e_dd56b172,
    0x6d744027_857300ad_9b165cba_0c171818,
    0x7319ba64_c711785a_1439670d_fe3d68e6,
    0x78ad74e0_1bd8ec78_362474f1_a105878f,
    0x7e2e936f_e26ae7ed_13e03e48_89485c69,
    0x839c3cc9_17ff6cb4_bfd79717_f2880abf,
    0x88f59aa0_da591421_b892ca83_61d8c84c,
    0x8e39d9cd_73464364_bba4cfec_bff54867,
    0x93682a66_e896f544_b1782191_1e71c16e,
    0x987fbfe7_0b81a708_19cec845_ac87a5c6,
    0x9d7fd149_0285c9e3_e25e3954_9638ae68,
    0xa2679928_48eeb0c0_3b5167ee_359a234e,
    0xa73655df_1f2f489e_149f6e75_993468a3,
    0xabeb49a4_6764fd15_1becda80_89c1a94c,
    0xb085baa8_e966f6da_e4cad00d_5c94bcd2,
    0xb504f333_f9de6484_597d89b3_754abe9f,
    0xb96841bf_7ffcb21a_9de1e3b2_2b8bf4db,
    0xbdaef913_557d76f0_ac85320f_528d6d5d,
    0xc1d8705f_fcbb6e90_bdf0715c_b8b20bd7,
    0xc5e40358_a8ba05a7_43da25d9_9267326b,
    0xc9d1124c_931fda7a_8335241b_e1693225,
    0xcd9f023f_9c3a059e_23af31db_7179a4aa,
    0xd14d3d02_313c0eed_744fea20_e8abef92,
    0xd4db3148_750d1819_f630e8b6_dac83e69,
    0xd84852c0_a80ffcdb_24b9fe00_663574a4,
    0xdb941a28_cb71ec87_2c19b632_53da43fc,
    0xdebe0563_7ca94cfb_4b19aa71_fec3ae6d,
    0xe1c5978c_05ed8691_f4e8a837_2f8c5810,
    0xe4aa5909_a08fa7b4_122785ae_67f5515d,
    0xe76bd7a1_e63b9786_12512952_9d48a92f,
    0xea09a68a_6e49cd62_15ad45b4_a1b5e823,
    0xec835e79_946a3145_7e610231_ac1d6181,
    0xeed89db6_6611e307_86f8c20f_b664b01b,
    0xf1090827_b43725fd_67127db3_5b287316,
    0xf3144762_47088f74_a5486bdc_455d56a2,
    0xf4fa0ab6_316ed2ec_163c5c7f_03b718c5,
    0xf6ba073b_424b19e8_2c791f59_cc1ffc23,
    0xf853f7dc_9186b952_c7adc6b4_988891bb,
    0xf9c79d63_272c4628_4504ae08_d19b2980,
    0xfb14be7f_bae58156_2172a361_fd2a722f,
    0xfc3b27d3_8a5d49ab_256778ff_cb5c1769,
    0xfd3aabf8_4528b50b_eae6bd95_1c1dabbe,
    0xfe132387_0cfe9a3d_90cd1d95_9db674ef,
    0xfec46d1e_89292cf0_41390efd_c726e9ef,
    0xff4e6d68_0c41d0a9_0f668633_f1ab858a,
    0xffb10f1b_cb6bef1d_421e8eda_af59453e,
    0xffec4304_266865d9_56575523_66961732,
];
