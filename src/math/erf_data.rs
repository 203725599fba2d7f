//! Sample-interval polynomials for binary32 erf.
//!
//! P[i] is a degree-8 minimax polynomial for erf on [i/16, (i+1)/16),
//! 54.7 to 71.3 bits of relative accuracy per interval. A few
//! coefficients were nudged offline off the original minimax optimum so
//! that no interval carries an input whose directed rounding the double
//! evaluation cannot decide. Generated offline (Sollya).

pub(crate) static P: [[u64; 9]; 63] = [
    [
        0x0000000000000000, 0x3ff20dd750429b6d, 0x3d31a1fa038de73f,
        0xbfd812746b09d739, 0x3e2a74e2007e4ad5, 0x3fbce2eec8e04e99,
        0x3edcb02ed79ae069, 0xbf9ba50a1c8a8c66, 0x3f553ba5079f10ca,
    ],
    [
        0x3d817522e7161c8e, 0x3ff20dd750349b0c, 0x3e43d1d29c38f2d2,
        0xbfd812756f01cc35, 0x3ed102eabdcd0f60, 0x3fbcdfff30e339d3,
        0x3f35aec79e9f632d, 0xbf9d1ae1fa130cad, 0x3f7177cf09d8294b,
    ],
    [
        0x3ded770ff9e6ab3c, 0x3ff20dd74cdaa079, 0x3e965d62b05993fb,
        0xbfd81289ce96a985, 0x3f0a487bc9d58f4c, 0x3fbccd6871a0c1f9,
        0x3f579400df4d7666, 0xbf9fae4e5e8a169c, 0x3f7be094c6813327,
    ],
    [
        0x3e305c54d2412c58, 0x3ff20dd7254519fa, 0x3ec9201984735bcf,
        0xbfd812fdb389a1e4, 0x3f2e3990dd283729, 0x3fbc9b9f408d312f,
        0x3f6c483a994a4e0c, 0xbfa169ccca042847, 0x3f822b9dd3d479d0,
    ],
    [
        0x3e5cf14f0538be5a, 0x3ff20dd66214dda2, 0x3eeb51ed49aa9444,
        0xbfd8144abda53798, 0x3f447ac16515889c, 0x3fbc491e843dbb9a,
        0x3f7878b45cf90ca0, 0xbfa2e5d85168ff00, 0x3f852b7603448aaa,
    ],
    [
        0x3e7959dc6ccdab3a, 0x3ff20dd493858436, 0x3f00f2dd5711a1db,
        0xbfd816522f7ae1f4, 0x3f526621c73eb1e3, 0x3fbbf4e80a4d6c3a,
        0x3f807dac904839c8, 0xbfa3e21e8aee84bf, 0x3f86c579ac750449,
    ],
    [
        0x3e7903809630b906, 0x3ff20dd485bfcdf8, 0x3f0194cb8c05465d,
        0xbfd8167d7702b40b, 0x3f532ce7ad45fb3a, 0x3fbbec739b84c959,
        0x3f80eb8def355296, 0xbfa3fad8c5accf43, 0x3f86eb95e6d8419f,
    ],
    [
        0xbeac1ffc82e40859, 0x3ff20de6067f974e, 0xbf198dc27d77cb35,
        0xbfd80cda511544d5, 0xbf3f962e319d4541, 0x3fbcaf597336866f,
        0x3f741f5ab9a230e1, 0xbfa2e0091e26acf1, 0x3f85ac59a499e173,
    ],
    [
        0xbed8b3ce2c76cce8, 0x3ff20e39cf73f331, 0xbf4554c4f8722b69,
        0xbfd7e8ec3bc20921, 0xbf783d3c8036c60e, 0x3fbee509f0d3be05,
        0xbf6e00e8820090df, 0xbfa06151e980f24e, 0x3f83308588f3288b,
    ],
    [
        0xbef8be17e78be477, 0x3ff20f3fd5ab91c9, 0xbf61fb47d5c751de,
        0xbfd78f87c79acdae, 0xbf9268a27bde7dae, 0x3fc1a1f7270a43ec,
        0xbf933b7233f74a14, 0xbf98eb708060887e, 0x3f7f6ca53c17216f,
    ],
    [
        0xbf12f0e94706329c, 0x3ff211c94787f9a8, 0xbf7720a3d20ebf54,
        0xbfd6db5a5cc1ceb9, 0xbfa46cbce0b73649, 0x3fc5366cf5f9b77a,
        0xbfa50bafa938e8e2, 0xbf8cf93569295709, 0x3f771600644e4177,
    ],
    [
        0xbf28311b38892cba, 0x3ff2171e18e65146, 0xbf891614b39f785c,
        0xbfd5a1979c1c5884, 0xbfb31aaa4f9dff37, 0x3fca604bc52f3ba3,
        0xbfb205f828f040af, 0xbf6039e905eb2fbd, 0x3f6c0e05909eb39d,
    ],
    [
        0xbf3adadf51bd571f, 0x3ff220ed735780e5, 0xbf97f58b040ce227,
        0xbfd3bb83f30bcde5, 0xbfbfbdfb30c59252, 0x3fd08dead7d56356,
        0xbfbafe7afa265fbf, 0x3f8746ffd5a33e5e, 0x3f53a794ed0fa395,
    ],
    [
        0xbf4a810ec5537f2d, 0x3ff230fcea9e25e3, 0xbfa49cd82d65b393,
        0xbfd114639510b7b9, 0xbfc806afe9d81b91, 0x3fd4912b7e5a470f,
        0xbfc26f654d211058, 0x3f9988ca4370a30b, 0xbf4d258177b8251c,
    ],
    [
        0xbf578d89e48a53f6, 0x3ff24880485b11e0, 0xbfb02dc27aee0746,
        0xbfcb73ce6352161f, 0xbfd0cd5e3e317d16, 0x3fd8f224434b875a,
        0xbfc770fce058233d, 0x3fa34f847ce948f6, 0xbf66424e95f4ceff,
    ],
    [
        0xbf62f7854ff8ef7b, 0x3ff26728ecb8239b, 0xbfb754708b273ed9,
        0xbfc3d3353afd28b9, 0xbfd5e3685a7ea032, 0x3fdd49cffc1f0a58,
        0xbfcc13c3b9a3255c, 0x3fa8f7e777860d88, 0xbf712c534d70236f,
    ],
    [
        0xbf6b944b9611e298, 0x3ff2899ce7774285, 0xbfbede8316bea9ec,
        0xbfb88fd90bbfec3d, 0xbfda9b894cb0b0d5, 0x3fe088b749b8fa83,
        0xbfcfdcc1b631d593, 0x3fad4d2f931a20e8, 0xbf7583c366b34ce1,
    ],
    [
        0xbf71d940c81edefd, 0x3ff2a83a2610a58c, 0xbfc2979882c6bbcf,
        0xbfa94c3014e4d937, 0xbfde1eab53d43df3, 0x3fe1dc197df00709,
        0xbfd12eb4eb016b6e, 0x3fb0003483799f31, 0xbf781078223d980f,
    ],
    [
        0xbf73dbb2492c1851, 0x3ff2b6a29990969f, 0xbfc401344f618329,
        0xbf9e55a1341cc883, 0xbfdf89fb52db2260, 0x3fe25e6a1c4e3a09,
        0xbfd1a393d5339647, 0x3fb07802069f0f80, 0xbf78e769784541ed,
    ],
    [
        0xbf70d22acb495d76, 0x3ff2a25dc5205448, 0xbfc227bbb1d3b7b3,
        0xbfab8326c71d3216, 0xbfddedef1e5247ae, 0x3fe1d4de78710b86,
        0xbfd130c7d11ccb41, 0x3fb00a7f96540989, 0xbf783093e4d12b84,
    ],
    [
        0xbf525392d712ac6c, 0x3ff2544e485d02ac, 0xbfb6b1ebf9c55d94,
        0xbfc1bc70fc4dbab2, 0xbfd88443a50d4486, 0x3fe01ab5d47085d4,
        0xbfcf9fff40a39f3a, 0x3fad918785f330d6, 0xbf762f0361180069,
    ],
    [
        0x3f7604801d07d378, 0x3ff1b28516412dce, 0x3f90dd8cac4977e3,
        0xbfd319f4d9dda20e, 0xbfcd92dd63478e36, 0x3fda497fe058e897,
        0xbfcb1e95f53528f2, 0x3fa9a66ae1af0e20, 0xbf73338cb3b2000e,
    ],
    [
        0x3f9127604309e4f3, 0x3ff0a3cc74c36310, 0x3fc79d5685eb39e7,
        0xbfe15caed0fd5ae9, 0xbf832bc48b25d630, 0x3fd20a314bbc5fa1,
        0xbfc52040e741925e, 0x3fa4abeafeba6963, 0xbf6f2a2c0412e2da,
    ],
    [
        0x3fa18f58f056ca05, 0x3fee2887dd4a0572, 0x3fdafe4dcce947c0,
        0xbfebeb0de5c874c1, 0x3fd1bf685ea40949, 0x3fbf56afb052e2e2,
        0xbfbc0f175b3a0245, 0x3f9e0fe619145350, 0xbf67516e7f765269,
    ],
    [
        0x3fae2b8cf6db29e5, 0x3fe9f536f1a0d7a8, 0x3fe74ac354e64f0d,
        0xbff47c7d93b9a5cb, 0x3fe3bfac77271869, 0xbfae19af438b4764,
        0xbfa9321056d55063, 0x3f924839594cc40e, 0xbf5eed7a5a2fa6f5,
    ],
    [
        0x3fb742c2a597591f, 0x3fe4ba48d9547627, 0x3ff1807ec11e2eff,
        0xbffbfaf045a8cd2f, 0x3fefbcdab38cbbed, 0xbfd00a0bfdc66fa3,
        0x3f88f1d1945e8430, 0x3f7b23763624c960, 0xbf5034c346689e51,
    ],
    [
        0x3fc08daffa9dbc52, 0x3fdd56df8be243b1, 0x3ff8067bc15af0f6,
        0xc002012947b8f1cb, 0x3ff60ba9081bc44e, 0xbfdc3480c1aabbad,
        0x3fb2189437f4cd30, 0xbf6e0756f5e5ab66, 0xbf29d5de0401b444,
    ],
    [
        0x3fc60d097fec2c15, 0x3fd04ec70ea7307c, 0x3ffec88d3f6abf7f,
        0xc006029fed83319e, 0x3ffbfb5bc8d87f59, 0xbfe3bbc071fb9da9,
        0x3fbf7335e4600014, 0xbf899b26d40298d2, 0x3f3e035ff62737c7,
    ],
    [
        0x3fcbaf818ac5b000, 0x3fab65438ce6abd8, 0x40029d2385e0df4d,
        0xc009b1c9782e5814, 0x40009fc12cb7b2f3, 0xbfe88d299591af68,
        0x3fc53c458548c6bd, 0xbf94019d5cbaf38d, 0x3f4f7c82276d1e60,
    ],
    [
        0x3fd06cd8cfe691d1, 0xbfbfed15fcba1234, 0x40055e7cf8f797d3,
        0xc00cbcc2c24558bd, 0x4002b9796fc79581, 0xbfec43780d5bb181,
        0x3fc956058fe96509, 0xbf992efa1d518c4e, 0x3f55768a29a448ab,
    ],
    [
        0x3fd266823e84aa8c, 0xbfd06bac5b504c6b, 0x4007574c932a907d,
        0xc00ed80804657738, 0x4004218d5a40e406, 0xbfeeab02c3f125d6,
        0x3fcbe7b9c15d334c, 0xbf9c522eb6b596b2, 0x3f58d0e2ba549087,
    ],
    [
        0x3fcc0770fb34ebca, 0x3f95915e4d02ed30, 0x4003679fa7788efd,
        0xc00adbb1e1b1f0cb, 0x40019beaa1cdee44, 0xbfea954d14e9ab0a,
        0x3fc7c551a00defc6, 0xbf978a117adda86c, 0x3f53fa478721967b,
    ],
    [
        0x3fc817abe0b84f38, 0x3fc0cbdd5ffea260, 0x40020ad71ba5e35a,
        0xc009ace2e9fda9f0, 0x4000fb5e98c30a39, 0xbfe9c253e6222776,
        0x3fc72039e8916748, 0xbf9701d04db3e0ff, 0x3f53a67265195282,
    ],
    [
        0x3fd09d0dc6a0b9a1, 0xbfc37094c280152f, 0x4005f8d21e63afee,
        0xc00d9212fe1155b6, 0x4003650612a085c1, 0xbfed957f79ff0573,
        0x3fcaea32667c224c, 0xbf9b4bb5ee828b5e, 0x3f57e596b01c7e21,
    ],
    [
        0x3fc88d92b7d0b2e0, 0x3fba5c83f62eceb9, 0x40029e089190895b,
        0xc00a6a90677d25fc, 0x40018a6ff4d452ef, 0xbfeacb6ab6f94121,
        0x3fc84aa309ba04aa, 0xbf9879dfacb93f6f, 0x3f553ea80133aff3,
    ],
    [
        0x3fb6f0a11e4354ae, 0x3fde7f7fd1852db3, 0x3ffbad610cc308eb,
        0xc0060caf27ec807d, 0x3ffe17eb7dc6e68d, 0xbfe725d1c12d6a29,
        0x3fc4f5625641d43e, 0xbf94fe996514b35d, 0x3f520ffea645fe77,
    ],
    [
        0xbfa7dcc8b6e22c0f, 0x3feebdafcd5f7061, 0x3fef43bbdde0e578,
        0xc000b2a782719164, 0x3ff8260d4635d6b0, 0xbfe2ebd239883d03,
        0x3fc133c0ae13b006, 0xbf912dccc17e6dcb, 0x3f4d5789a1d2736d,
    ],
    [
        0xbfcb566cc7daf430, 0x3ff89c36239296d8, 0x3fba688d3d83bf53,
        0xbff54e1bda84472e, 0x3ff19d2027e403e5, 0xbfdcccc62cf54ee5,
        0x3fba9571db5dcfd9, 0xbf8aa09e80732cf0, 0x3f46a7ceb5764d60,
    ],
    [
        0xbfd9f06394976829, 0x40017890ca36ab46, 0xbfeb2604bf70ca6e,
        0xbfe0f8049f65b7b7, 0x3fe5bb4ad0d199fe, 0xbfd3b508f5cae4b2,
        0x3fb2ecfe5452163f, 0xbf83418a4a9b0cb5, 0x3f40725646d5c132,
    ],
    [
        0xbfe3a0e5feb35b76, 0x4006ef4ed4e24979, 0xbffd441ec8ecae5f,
        0x3fd1919a57def1fe, 0x3fd10bc397515907, 0xbfc6120fbe73a9ee,
        0x3fa79e10abf10c54, 0xbf792921b939e0ff, 0x3f35ef4f24c0ea4e,
    ],
    [
        0xbfea7c4bfb70723a, 0x400c6bc8f25b318f, 0xc00650a1f6442f19,
        0x3ff0af898f450113, 0xbfbe3010d57d27b9, 0xbfa94e8205929930,
        0x3f9609589fc261fc, 0xbf6b463e9387cb9e, 0x3f296cad0696f6ef,
    ],
    [
        0xbff09775e1426c89, 0x4010d328cfbaf130, 0xc00d75583bca27db,
        0x3ffbd6f62ef1454f, 0xbfdd51753c0aec97, 0x3fad16c34b8363a0,
        0x3f499a4ffbe2e69a, 0xbf50a570169a02b9, 0x3f1540770ec67003,
    ],
    [
        0xbff3acb5a629c744, 0x40132cb49b679ad8, 0xc011dd0c89cdc5e8,
        0x4002b2ad52d01bf3, 0xbfe7c3b8301b653d, 0x3fc260b85d3ad94b,
        0xbf9021c650a6df5f, 0x3f49b74c8de5fdbf, 0xbed3dd78fec64623,
    ],
    [
        0xbff657c70e381c59, 0x401529497a4125ed, 0xc01473bd78185c8e,
        0x40068d91a418d387, 0xbfeef0e89846209c, 0x3fcaeda928112a92,
        0xbf9cddf14331e860, 0x3f614492e1034ea1, 0xbf1162cd990ef4f4,
    ],
    [
        0xbff86fa9099ed877, 0x4016af47a13091f9, 0xc016647155543e99,
        0x40096093bed02355, 0xbff20a3dace5a1a2, 0x3fd074def92f8860,
        0xbfa2ca25bf0f9802, 0x3f6883fe407e5663, 0xbf1bf00bd223955f,
    ],
    [
        0xbff9dabceaa53ef2, 0x4017b1bbbdd16e75, 0xc017a66a15bda47b,
        0x400b2afe002ce322, 0xbff3a22dcd3f6f65, 0x3fd2458ce85f7ad8,
        0xbfa55fcf722dadf7, 0x3f6cb8c557818833, 0xbf20f6b0ed5612f3,
    ],
    [
        0xbffa8896e4a6d2aa, 0x40182aeda87720fd, 0xc0183a45683821ed,
        0x400bf9269c9d744d, 0xbff455d70a548e03, 0x3fd30df6f11bbb10,
        0xbfa67746121beaa0, 0x3f6e76252c6857bb, 0xbf222d3ac72f9019,
    ],
    [
        0xbffa70baf34bc6dc, 0x40181af02a272b92, 0xc0182785730280bf,
        0x400be007a741e79d, 0xbff440cf2e535b97, 0x3fd2f76f09f2faa6,
        0xbfa6591bcdaa90ba, 0x3f6e480062060f24, 0xbf220e5b36588ae5,
    ],
    [
        0xbff9a0e93ac10922, 0x401790a1dddaca16, 0xc0178670b1575d81,
        0x400b099dde3f1a0a, 0xbff38e6d862ca653, 0x3fd239788249a257,
        0xbfa55c3b43d826a6, 0x3f6cc7462bbb5709, 0xbf210e452d561655,
    ],
    [
        0xbff8252aaa5fdbca, 0x401698cf66a164d8, 0xc0166b67fa2d929a,
        0x4009982dda5f5300, 0xbff261088a67efd4, 0x3fd0febb2ecaa837,
        0xbfa3c16038736604, 0x3f6a6250d1a023ac, 0xbf1efc59eaa8ea2a,
    ],
    [
        0xbff6119a9f57324b, 0x401544ba93908e0e, 0xc014eea346825e61,
        0x4007b0f08786bebb, 0xbff0db58acb4855d, 0x3fcedf9385ce2e65,
        0xbfa1c2d6a0e4f02c, 0x3f67779cd1152312, 0xbf1b40b998327067,
    ],
    [
        0xbff38538135c2d6b, 0x4013ab778681b0d9, 0xc0132d53653c3e48,
        0x40057d2cbc3c3721, 0xbfee42746b7c5034, 0x3fcb67f26c55b0b0,
        0xbf9f2bdb1b6647e8, 0x3f6458eef7440dce, 0xbf17567817ced13c,
    ],
    [
        0xbff09fcc03a0e6e6, 0x4011e33f04319b2a, 0xc011420a766801fb,
        0x40032089b4c7724a, 0xbfeaa0410b391639, 0x3fc7d40b38d645ed,
        0xbf9ac48bc9826c5b, 0x3f61400c90749fdf, 0xbf1386862e1912a1,
    ],
    [
        0xbfeb0327507012bb, 0x4010014f28088c34, 0xc00e89a3c9984ba5,
        0x4000b99bf7416867, 0xbfe70001bdff73a3, 0x3fc4533fc46665c7,
        0xbf96898290ab1bb4, 0x3f5ca941b22269c4, 0xbf0fffadf5ad2eec,
    ],
    [
        0xbfe494f0e7edd913, 0x400c330b22f4fe98, 0xc00a95ddae62b176,
        0x3ffcc3f8f2099078, 0xbfe38793a98e6c79, 0x3fc108c5991a7873,
        0xbf92a2dc3b02c1df, 0x3f576057aeb92203, 0xbf09bbe5bc349673,
    ],
    [
        0xbfdc5635bc5b5c63, 0x400877b4bcd87ab6, 0xc006c90c441642ce,
        0x3ff857cfd1efa39d, 0xbfe0500e818aefcb, 0x3fbc140582d5e3a6,
        0xbf8e4ce5440b1272, 0x3f52bd48314faba5, 0xbf04563f82bd37a1,
    ],
    [
        0xbfcfd7d7c6c12e98, 0x4004eb818bc8b8c9, 0xc0033cb5f699ca60,
        0x3ff44988778fec7d, 0xbfdad491ee6f6a1b, 0x3fb6c758b5aabbdd,
        0xbf883e0abfc84418, 0x3f4d906f62b5ade4, 0xbeffa04569466a81,
    ],
    [
        0xbfb0d89a80f6436a, 0x4001a1e3e67ac84d, 0xc00001b580223e05,
        0x3ff0a8c7d02d3f00, 0xbfd5bcc3dbdafdae, 0x3fb233ec12b50445,
        0xbf831a6894809be1, 0x3f46f7b827d77b0a, 0xbef83795fce4295f,
    ],
    [
        0x3fba4f4ffaa5a394, 0x3ffd4fa3e193e3ba, 0xbffa438655dc7b25,
        0x3feaf9075ee3e37e, 0xbfd15c1e0b4ce3d9, 0x3facacc93e7bcfbe,
        0xbf7dac64d7bcde0c, 0x3f4195ebce9492f6, 0xbef246c0fe0d5bc6,
    ],
    [
        0x3fd04ebe38ea8eb2, 0x3ff808583c3b6737, 0xbff540a3637cd391,
        0x3fe58911cc2053ab, 0xbfcb5850ef1de405, 0x3fa645fa17d64385,
        0xbf76ba25bf3d63ab, 0x3f3a8e9a244e5f39, 0xbeeb348b07f975db,
    ],
    [
        0x3fd8e90243f12365, 0x3ff3718628fa6c30, 0xbff0f7dbabfb2b6f,
        0x3fe0f6d959a579ea, 0xbfc53f9058a7081b, 0x3fa111b802581a18,
        0xbf712c99f48497bd, 0x3f33c91033540ae0, 0xbee3fac0d25e886c,
    ],
    [
        0x3fe0300d47401e23, 0x3fef0d7305e1ebf5, 0xbfeabe00f68d579b,
        0x3fda60d7ad53ba65, 0xbfc04bb8fbc7bb59, 0x3f99d26cd3cc8b41,
        0xbf699eb5268623b1, 0x3f2d19d846b79653, 0xbedcf853c59e8c7d,
    ],
    [
        0x3fe35ea1608c9887, 0x3fe87b45f8001920, 0xbfe4ce2bf5dd9a7d,
        0x3fd43f7e85413fcf, 0xbfb8adcffe1e4b4c, 0x3f9349106455fc8a,
        0xbf62debcc727980e, 0x3f252289f1b6f48d, 0xbed4be655cf56d80,
    ],
];
