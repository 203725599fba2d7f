//! Breakpoint tables and polynomial data for binary64 sinh.
//!
//! T[i] = (x_i, s_i, e_i): x_i near i*2^8/magic with magic =
//! 0x1.70f77fc88ae3cp6, s_i ~ sinh(x_i) and s_i+e_i ~ cosh(x_i) to 53+16
//! bits. U[j] = (x_j, s_j, c_j) with x_j near j/magic to 53+14 bits.
//! TL/UL carry the correction terms that extend both tables to the
//! accurate path's precision. S1/C1 are the fast sinh/cosh polynomials on
//! |w| < 0.00543 (relative error 2^-74.8 / 2^-81.2), S2/C2 the
//! double-double ones (2^-108.3 / 2^-105.8). EXC_W and EXC_V list the
//! inputs whose rounding the accurate bound cannot separate, with their
//! exact results (table-cell k = 0 and i = 0 respectively).
//! Generated offline (Sollya/sage table search).

pub(crate) static T: [[u64; 3]; 256] = [
    [0x0000000000000000, 0x0000000000000000, 0x3ff0000000000000],
    [0x400633d9a9077741, 0x401ff678cbb5f806, 0x3fafe9ad24cdfb00],
    [0x401633d9a9a65199, 0x4060165a65ef5742, 0x3f6fd369d76ffbf2],
    [0x4020a6e33f3d334f, 0x40a021ab2b881192, 0x3f2fbd36146e7db4],
    [0x402633d9a9a5efef, 0x40e02cf40653010d, 0x3eefa711ce962a12],
    [0x402bc0d0140f44d1, 0x41203844b629b49b, 0x3eaf90fcfafac308],
    [0x4030a6e33f3d3c0d, 0x4160439d504b756f, 0x3e6f7af78ec1be86],
    [0x40336d5e74711931, 0x41a04efdda25e990, 0x3e2f65017f8026e2],
    [0x403633d9a9a6f0ce, 0x41e05a665982f42b, 0x3def4f1ac209af2e],
    [0x4038fa54dedb8507, 0x422065d6d3bee2f0, 0x3daf39434c13fdea],
    [0x403bc0d01410e054, 0x4260714f4e902ff7, 0x3d6f237b12b69573],
    [0x403e874b4944a500, 0x42a07ccfcf68f1d5, 0x3d2f0dc20b99f389],
    [0x4040a6e33f3d8f7e, 0x42e088585c2ce353, 0x3ceef8182b9edc86],
    [0x40420a20d9d69758, 0x432093e8fa072122, 0x3caee27d690fa264],
    [0x40436d5e7471f370, 0x43609f81af32ab2a, 0x3c6eccf1b848b20a],
    [0x4044d09c0f0ca428, 0x43a0ab2280f4e61b, 0x3c2eb7750f7fc962],
    [0x404633d9a9a660d4, 0x43e0b6cb74f0d3ef, 0x3beea2076449a7fa],
    [0x404797174440f350, 0x4420c27c9112cb1a, 0x3bae8ca8abc38f11],
    [0x4048fa54dedab4ba, 0x4460ce35dad821c2, 0x3b6e7758dbe4debb],
    [0x404a5d9279764a4e, 0x44a0d9f7585265db, 0x3b2e6217e9a601e9],
    [0x404bc0d014104f08, 0x44e0e5c10ecbff98, 0x3aee4ce5cb766df7],
    [0x404d240daeac98d2, 0x4520f19304871d39, 0x3aae37c276159f25],
    [0x404e874b49457c96, 0x4560fd6d3e886d21, 0x3a6e22ade089a00d],
    [0x404fea88e3dee0c7, 0x45a1094fc31c92fe, 0x3a2e0da7ff9cd127],
    [0x4050a6e33f3c8752, 0x45e1153a981a366f, 0x39edf8b0c8fbf3f3],
    [0x405158820c8916e5, 0x4621212dc3132448, 0x39ade3c832da8b54],
    [0x40520a20d9d75dab, 0x46612d294a762155, 0x396dceee31f86c9b],
    [0x4052bbbfa722e1f4, 0x46a1392d32e8c449, 0x392dba22be3e7e32],
    [0x40536d5e74724076, 0x46e14539840f4ed5, 0x38eda565ca7422d8],
    [0x40541efd41bf286e, 0x4721514e42179819, 0x38ad90b74f693782],
    [0x4054d09c0f0c42cd, 0x47615d6b739e3cc5, 0x386d7c1741c9f285],
    [0x4055823adc5b1a95, 0x47a169911ef8312d, 0x382d678596d06228],
    [0x405633d9a9a6e96e, 0x47e175bf48c67da3, 0x37ed530246a4a2e0],
    [0x4056e57876f3b02c, 0x482181f5f8116732, 0x37ad3e8d456ce04f],
    [0x40579717444087ae, 0x48618e35328fe587, 0x376d2a268997b6ce],
    [0x405848b6118f520f, 0x48a19a7cfec098a0, 0x372d15ce08557030],
    [0x4058fa54dedb6ee6, 0x48e1a6cd615c1f5a, 0x36ed0183b9d2f6d1],
    [0x4059abf3ac293105, 0x4921b3266195629b, 0x36aced479232ad2d],
    [0x405a5d9279760ec8, 0x4961bf8804bfbdde, 0x366cd91988bb0f73],
    [0x405b0f3146c33ea5, 0x49a1cbf2513bc758, 0x362cc4f99306b3b6],
    [0x405bc0d0140fcb9c, 0x49e1d8654cd45e9f, 0x35ecb0e7a7b1985a],
    [0x405c726ee15db1fc, 0x4a21e4e0fe2a8059, 0x35ac9ce3bc0c9986],
    [0x405d240daeab5408, 0x4a61f1656ae27543, 0x356c88edc70cfd77],
    [0x405dd5ac7bf84a89, 0x4aa1fdf298fad145, 0x352c7505bf22c3d7],
    [0x405e874b4945270a, 0x4ae20a888ebc3c40, 0x34ec612b9a55e9a7],
    [0x405f38ea169333c2, 0x4b22172752a84c61, 0x34ac4d5f4e643d37],
    [0x405fea88e3df7e10, 0x4b6223ceea126d0f, 0x346c39a0d2f255f1],
    [0x40604e13d896bc0e, 0x4ba2307f5c2133e9, 0x342c25f01cd80441],
    [0x4060a6e33f3ce1b0, 0x4be23d38ae110ea2, 0x33ec124d23f54d41],
    [0x4060ffb2a5e2bd66, 0x4c2249fae66766b7, 0x33abfeb7de37bb8e],
    [0x406158820c8a300e, 0x4c6256c60c71601f, 0x336beb30406cc819],
    [0x4061b15173311def, 0x4ca2639a2538fed0, 0x332bd7b642e5292b],
    [0x40620a20d9d796d3, 0x4ce2707737095da9, 0x32ebc449dc111294],
    [0x406262f0407db5be, 0x4d227d5d48388dcd, 0x32abb0eb025dca16],
    [0x4062bbbfa7251d8a, 0x4d628a4c6004353c, 0x326b9d99aaed4e44],
    [0x4063148f0dcb5cba, 0x4da2974483524df3, 0x322b8a55ce6ef373],
    [0x40636d5e7471f2bc, 0x4de2a445b9550519, 0x31eb771f6230ce14],
    [0x4063c62ddb162742, 0x4e22b15006ceaba9, 0x31ab63f65f274e58],
    [0x40641efd41bf5431, 0x4e62be637667b99e, 0x316b50dab5ae217d],
    [0x406477cca866558e, 0x4ea2cb800a562c48, 0x312b3dcc628f34b6],
    [0x4064d09c0f0d62d6, 0x4ee2d8a5ca4b916e, 0x30eb2acb5a9842f7],
    [0x4065296b75b2e80c, 0x4f22e5d4bbc3de1e, 0x30ab17d795d94c81],
    [0x4065823adc59f02e, 0x4f62f30ce6f96f2d, 0x306b04f1087e34c7],
    [0x4065db0a430012bf, 0x4fa3004e50f38b3e, 0x302af217ab579370],
    [0x406633d9a9a69ca5, 0x4fe30d9900ef44bd, 0x2feadf4b741981d2],
    [0x40668ca9104ce404, 0x50231aecfd04334e, 0x2faacc8c5a269d97],
    [0x4066e57876f46315, 0x5063284a4c957ba0, 0x2f6ab9da531c9c73],
    [0x40673e47dd9a70ce, 0x50a335b0f491672a, 0x2f2aa73558154d58],
    [0x406797174441a449, 0x50e34320fd0f7294, 0x2eea949d5dce2af9],
    [0x4067efe6aae85e4b, 0x5123509a6ba52952, 0x2eaa82125c8e51a2],
    [0x406848b6118e4679, 0x51635e1d46afc842, 0x2e6a6f944b9165b1],
    [0x4068a1857833affd, 0x51a36ba994f8a757, 0x2e2a5d23218b41c3],
    [0x4068fa54dedc7a43, 0x51e3793f5f76ff94, 0x2dea4abed24c8e1f],
    [0x406953244581c997, 0x522386dea8a0ebfa, 0x2daa38675a8010ad],
    [0x4069abf3ac293e81, 0x526394877a893217, 0x2d6a261cac934c41],
    [0x406a04c312cf16ea, 0x52a3a239d98eb75e, 0x2d2a13dec2acd45b],
    [0x406a5d927975fb78, 0x52e3aff5ce014458, 0x2cea01ad91b9d5fa],
    [0x406ab661e01bd3ed, 0x5323bdbb5d4b28da, 0x2ca9ef89128e067a],
    [0x406b0f3146c3d309, 0x5363cb8a901dfaa7, 0x2c69dd7139b75655],
    [0x406b6800ad69a0e2, 0x53a3d9636a87f998, 0x2c29cb6601e560d1],
    [0x406bc0d014113f9c, 0x53e3e745f5c66b04, 0x2be9b9675f0d615b],
    [0x406c199f7ab7ae41, 0x5423f53236c2b206, 0x2ba9a7754ad2d91f],
    [0x406c726ee15daf59, 0x5464032834c04250, 0x2b69958fbbd65b72],
    [0x406ccb3e4803620c, 0x54a41127f6a22eef, 0x2b2983b6a9428fe1],
    [0x406d240daeaab289, 0x54e41f3184726aa3, 0x2ae971ea08d9e55e],
    [0x406d7cdd1551632b, 0x55242d44e3a308ab, 0x2aa96029d3b653ad],
    [0x406dd5ac7bf8a4a2, 0x55643b621bd248f9, 0x2a694e76003c4cb0],
    [0x406e2e7be29f16a5, 0x55a449893304d214, 0x2a293cce86df1207],
    [0x406e874b49461158, 0x55e457ba30fc656c, 0x29e92b335df1222b],
    [0x406ee01aafeb7465, 0x562465f51b4ba0ca, 0x29a919a47e86da9e],
    [0x406f38ea16920f8f, 0x56647439faae2f2b, 0x29690821ddd919d4],
    [0x406f91b97d38f1be, 0x56a48288d581c307, 0x2928f6ab741a722c],
    [0x406fea88e3dfb5c1, 0x56e490e1b281297f, 0x28e8e541391484e1],
    [0x407021ac2542b57a, 0x57249f4498117eb1, 0x28a8d3e325023a62],
    [0x40704e13d89669af, 0x5764adb18efecfb0, 0x2868c2912d45e3e8],
    [0x40707a7b8be9cb00, 0x57a4bc289cd0245e, 0x2828b14b4b3e4113],
    [0x4070a6e33f3c7e49, 0x57e4caa9c81d4106, 0x27e8a0117708ad51],
    [0x4070d34af2904c30, 0x5824d9351a4b5669, 0x27a88ee3a57e1467],
    [0x4070ffb2a5e3be0d, 0x5864e7ca988cda97, 0x27687dc1d07d6127],
    [0x40712c1a593675ab, 0x58a4f66a49835410, 0x27286cabf038f504],
    [0x407158820c8a4297, 0x58e5051436b0a8c1, 0x26e85ba1f9965986],
    [0x407184e9bfdd73bd, 0x592513c8650539d3, 0x26a84aa3e6d9e5fd],
    [0x4071b1517330fba0, 0x59652286dcec99cc, 0x266839b1ae47a883],
    [0x4071ddb92683cca3, 0x59a5314fa43489ce, 0x262828cb4932c526],
    [0x40720a20d9d62b2a, 0x59e54022c26cd9ba, 0x25e817f0aef2b816],
    [0x407236888d2ad2e5, 0x5a254f00427421a2, 0x25a80721d331d57d],
    [0x407262f0407e1ef2, 0x5a655de826b40941, 0x2567f65eb338a8c8],
    [0x40728f57f3d176d2, 0x5aa56cda785050f2, 0x2527e5a744bbed31],
    [0x4072bbbfa72450e5, 0x5ae57bd73ddb8a40, 0x24e7d4fb80606bfb],
    [0x4072e8275a78cb2c, 0x5b258ade817e6a06, 0x24a7c45b5adcd700],
    [0x4073148f0dcb4446, 0x5b6599f045ac3dcf, 0x2467b3c6d17a0728],
    [0x407340f6c11efe59, 0x5ba5a90c96232de3, 0x2427a33dd74a1aca],
    [0x40736d5e7473131f, 0x5be5b833790deb43, 0x23e792c065928ac8],
    [0x407399c627c55e00, 0x5c25c764f2e79f30, 0x23a7824e776e6f41],
    [0x4073c62ddb191ff5, 0x5c65d6a10f862a1b, 0x236771e8000d46aa],
    [0x4073f2958e6b4791, 0x5ca5e5e7d22a0575, 0x2327618cfbee7c29],
    [0x40741efd41bffd3e, 0x5ce5f53947f7cdd0, 0x22e7513d5d02b18c],
    [0x40744b64f512f715, 0x5d2604957289acd0, 0x22a740f92197aab1],
    [0x407477cca865bc1e, 0x5d6613fc5b751a06, 0x226730c03f813941],
    [0x4074a4345bb9179f, 0x5da6236e0b56df96, 0x22272092adae528d],
    [0x4074d09c0f0be881, 0x5de632ea8828fd0f, 0x21e7107065dc6604],
    [0x4074fd03c25fdf46, 0x5e264271dbd23ec4, 0x21a700595dbc7bfc],
    [0x4075296b75b3a49a, 0x5e6652040c0afca3, 0x2166f04d8f642eaa],
    [0x407555d32906a0c3, 0x5ea661a11f97a90c, 0x2126e04cf3d73e68],
    [0x4075823adc594d31, 0x5ee671491ebedc4f, 0x20e6d057829706c1],
    [0x4075aea28fac3111, 0x5f2680fc11e1af36, 0x20a6c06d3318b33e],
    [0x4075db0a43005669, 0x5f6690ba02212f60, 0x2066b08dfc1f69a9],
    [0x40760771f6539733, 0x5fa6a082f425d5f9, 0x2026a0b9d8f9eca0],
    [0x407633d9a9a69e5e, 0x5fe6b056f0935b4d, 0x1fe690f0c0fb1258],
    [0x407660415cfa1401, 0x6026c03600117277, 0x1fa68132ab81b8e4],
    [0x40768ca9104c92ed, 0x6066d0202862e0af, 0x1f66717f92d58117],
    [0x4076b910c39fd65c, 0x60a6e01573c2a145, 0x1f2661d76cde40ec],
    [0x4076e57876f44364, 0x60e6f015ea8d87f1, 0x1ee6523a316d3c88],
    [0x407711e02a47361f, 0x6127002190ca8316, 0x1ea642a7dc93925e],
    [0x40773e47dd9a8cc0, 0x6167103870faf39d, 0x1e663320641c22b3],
    [0x40776aaf90ed015f, 0x61a7205a9122f658, 0x1e2623a3c237009c],
    [0x407797174440e50d, 0x61e73087fc7aeb12, 0x1de61431ec207e4c],
    [0x4077c37ef79511d8, 0x622740c0b940fac0, 0x1da604cadbe7d0bf],
    [0x4077efe6aae77193, 0x62675104cc561995, 0x1d65f56e8ce6b2d0],
    [0x40781c4e5e3b13ac, 0x62a76154421da255, 0x1d25e61cf368bd84],
    [0x407848b6118e828c, 0x62e771af206da4ab, 0x1ce5d6d609f5c213],
    [0x4078751dc4e17d2e, 0x632782156ee129f2, 0x1ca5c799c9712bb5],
    [0x4078a18578359360, 0x6367928737c494c9, 0x1c65b868284ba0a1],
    [0x4078cded2b8886dd, 0x63a7a3047fd14f60, 0x1c25a94122279c3c],
    [0x4078fa54dedc53b2, 0x63e7b38d520067a1, 0x1be59a24acef0194],
    [0x407926bc92300d5f, 0x6427c421b506cfcd, 0x1ba58b12c282db95],
    [0x4079532445835dbd, 0x6467d4c1b07b3af9, 0x1b657c0b5bfbfbc6],
    [0x40797f8bf8d4e408, 0x64a7e56d4a6a6d09, 0x1b256d0e73dc19d9],
    [0x4079abf3ac287340, 0x64e7f62490ab8443, 0x1ae55e1bfdb25c35],
    [0x4079d85b5f7cd9f0, 0x652806e789a27483, 0x1aa54f33f3cffaae],
    [0x407a04c312cf523a, 0x656817b63952f70e, 0x1a654056529ff08f],
    [0x407a312ac6226e77, 0x65a82890abccb21e, 0x1a2531830f73afde],
    [0x407a5d927975c685, 0x65e83976e8ad72a0, 0x19e522ba239a7b71],
    [0x407a89fa2cc98b87, 0x66284a68f87fc04a, 0x19a513fb879d35d9],
    [0x407ab661e01c1dcc, 0x66685b66e1111c07, 0x19650547366d2d7c],
    [0x407ae2c9936ff4bd, 0x66a86c70ae6c4697, 0x1924f69d259ed44e],
    [0x407b0f3146c56ceb, 0x66e87d86697389c5, 0x18e4e7fd4d94b9bc],
    [0x407b3b98fa16ad76, 0x67288ea811890d70, 0x18a4d967aecee226],
    [0x407b6800ad6a1ad3, 0x67689fd5b8d1fddb, 0x1864cadc39d52a48],
    [0x407b946860bc2896, 0x67a8b10f623d80ba, 0x1824bc5aec2dc44e],
    [0x407bc0d014107222, 0x67e8c2551bc3ef5e, 0x17e4ade3ba177178],
    [0x407bed37c7645439, 0x6828d3a6e9c28fc6, 0x17a49f769fef7085],
    [0x407c199f7ab6ecd7, 0x6868e504d34c18df, 0x1764911397ccf60d],
    [0x407c46072e0b3b59, 0x68a8f66ee58326ea, 0x172482ba96cf8907],
    [0x407c726ee15d4135, 0x68e907e522ad27b7, 0x16e4746b9b16949a],
    [0x407c9ed694b152f2, 0x692919679a1308ee, 0x16a46626981b2547],
    [0x407ccb3e4802fc96, 0x69692af64d45c65a, 0x166457eb8c957ba5],
    [0x407cf7a5fb571fb4, 0x69a93c914c81c7ca, 0x162449ba6b5cec5b],
    [0x407d240daeab5f89, 0x69e94e389caa233e, 0x15e43b933087d695],
    [0x407d507561fd3c41, 0x6a295fec4265eb8d, 0x15a42d75d8554810],
    [0x407d7cdd155087f8, 0x6a6971ac4c64114c, 0x15641f62570d8267],
    [0x407da944c8a53fb3, 0x6aa98378c34e13a0, 0x15241158a5d98b25],
    [0x407dd5ac7bf76ab3, 0x6ae99551a97e8315, 0x14e40358c2db2bf0],
    [0x407e02142f4b1afd, 0x6b29a7370e2923a3, 0x14a3f562a222f4a4],
    [0x407e2e7be29ed5fb, 0x6b69b928f7ae1d91, 0x1463e7763ebbacb3],
    [0x407e5ae395f1d650, 0x6ba9cb276d913b39, 0x1423d99392cee083],
    [0x407e874b49444378, 0x6be9dd3278d7ca88, 0x13e3cbba97632507],
    [0x407eb3b2fc9955fd, 0x6c29ef4a27866fe3, 0x13a3bdeb41bbad20],
    [0x407ee01aafebaa3e, 0x6c6a016e79b80653, 0x1363b02591c3b8a5],
    [0x407f0c82633fa2e0, 0x6caa139f7f634ed1, 0x1323a2697b5a0529],
    [0x407f38ea1692528b, 0x6cea25dd3ca5e50d, 0x12e394b6fb6402a1],
    [0x407f6551c9e61309, 0x6d2a3827be3c5d10, 0x12a3870e0850c3ed],
    [0x407f91b97d385c43, 0x6d6a4a7f08ee7d16, 0x1263796e9e8d54e8],
    [0x407fbe21308bf692, 0x6daa5ce32a403b1c, 0x12236bd8b40f7409],
    [0x407fea88e3df7c15, 0x6dea6f5428e06818, 0x11e35e4c43ea7d6e],
    [0x40800b784b9a1438, 0x6e2a81d20fd97d03, 0x11a350c946049907],
    [0x408021ac2543dfd3, 0x6e6a945ce47f68e1, 0x1163434fb6795889],
    [0x408037dffeed1c99, 0x6eaaa6f4afcca835, 0x112335df8ebcd9cc],
    [0x40804e13d89795e1, 0x6eeab99980ce954b, 0x10e32878c3f18264],
    [0x40806447b23e6da7, 0x6f2acc4b50591e5f, 0x10a31b1b5b3316f1],
    [0x40807a7b8be88971, 0x6f6adf0a3e9c7685, 0x10630dc73d7cc921],
    [0x408090af65935ee7, 0x6faaf1d64c4707d9, 0x1023007c6a6688a2],
    [0x4080a6e33f3cf0e9, 0x6feb04af7bd2c18c, 0x0fe2f33ae02d5deb],
    [0x4080bd1718e63208, 0x702b1795d99ed6ef, 0x0fa2e6029615f33f],
    [0x4080d34af2902baf, 0x706b2a89726771b9, 0x0f62d8d38339e80a],
    [0x4080e97ecc39d1da, 0x70ab3d8a4be0a7f8, 0x0f22cbada3a375bc],
    [0x4080ffb2a5e3423c, 0x70eb50986fb39673, 0x0ee2be90f0a0e120],
    [0x408115e67f8cf85a, 0x712b63b3e8d22521, 0x0ea2b17d62aa7342],
    [0x40812c1a59373a55, 0x716b76dcc1820f9d, 0x0e62a472f2bc7d41],
    [0x4081424e32df90a1, 0x71ab8a12faa2c562, 0x0e229771a0383254],
    [0x408158820c8a00ba, 0x71eb9d56ab68199e, 0x0de28a795b6991c5],
    [0x40816eb5e632e232, 0x722bb0a7d09ea956, 0x0da27d8a267ae7bd],
    [0x408184e9bfdc6899, 0x726bc4067b4c58e9, 0x0d6270a3f601c96c],
    [0x40819b1d99876159, 0x72abd772b7b4886a, 0x0d2263c6c1ddaefa],
    [0x4081b15173310cff, 0x72ebeaec85c56067, 0x0ce256f28a1b1d2f],
    [0x4081c7854cda66f8, 0x732bfe73f2663c0d, 0x0ca24a2746325159],
    [0x4081ddb926848ea3, 0x736c12090b0ccd00, 0x0c623d64ed543f32],
    [0x4081f3ed002ab6b5, 0x73ac25abc86838d3, 0x0c2230ab8435e567],
    [0x40820a20d9d78e83, 0x73ec395c59a2513f, 0x0be223faec540e90],
    [0x40822054b3817321, 0x742c4d1aa6712e23, 0x0ba217533567e2e6],
    [0x408236888d2a282b, 0x746c60e6bea37535, 0x0b620ab4553bee02],
    [0x40824cbc66d3f314, 0x74ac74c0b3edc4e3, 0x0b21fe1e408632bd],
    [0x408262f0407df163, 0x74ec88a88ce0693a, 0x0ae1f190f3236a28],
    [0x408279241a278889, 0x752c9c9e510adf14, 0x0aa1e50c684e2966],
    [0x40828f57f3d0e0b9, 0x756cb0a20ab7d94f, 0x0a61d890998f1103],
    [0x4082a58bcd7ba70d, 0x75acc4b3c9b0ecfc, 0x0a21cc1d7d12d3e0],
    [0x4082bbbfa725bcb9, 0x75ecd8d39026d4a2, 0x09e1bfb311811006],
    [0x4082d1f380ce9114, 0x762ced0165db5cb6, 0x09a1b3515207904d],
    [0x4082e8275a77cdf1, 0x766d013d5aa5cb63, 0x0961a6f834ea16bc],
    [0x4082fe5b3422585f, 0x76ad15877ba9c4ce, 0x09219aa7b22bded1],
    [0x4083148f0dcb10b7, 0x76ed29dfc774d77d, 0x08e18e5fcaab5a8e],
    [0x40832ac2e775b7f0, 0x772d3e46559f7644, 0x08a18220702ad64a],
    [0x408340f6c11deeb0, 0x776d52bb2026285c, 0x086175e9a644370c],
    [0x4083572a9ac80d98, 0x77ad673e40eb1acf, 0x082169bb5d80af48],
    [0x40836d5e7471c12a, 0x77ed7bcfb96cda81, 0x07e15d959503dee2],
    [0x408383924e1baeca, 0x782d906f9614e92e, 0x07a1517845784344],
    [0x408399c627c43e55, 0x786da51ddb0d30f4, 0x076145636c6693a7],
    [0x4083affa016ee360, 0x78adb9da9f35d4d0, 0x07213956fc74f98b],
    [0x4083c62ddb186072, 0x78edcea5e0ab2e18, 0x06e12d52f6c0a77b],
    [0x4083dc61b4c1be4c, 0x792de37fad6718a1, 0x06a1215753306795],
    [0x4083f2958e6bcc4e, 0x796df868129e5737, 0x066115640a2fd7e6],
    [0x408408c96815ead0, 0x79ae0d5f183283c7, 0x06210979174122e8],
    [0x40841efd41beba8c, 0x79ee2264c3340c75, 0x05e0fd96777dc177],
    [0x408435311b68cf34, 0x7a2e377927969615, 0x05a0f1bc1f9dd497],
    [0x40844b64f5128431, 0x7a6e4c9c4974a550, 0x0560e5ea0d56a4d5],
    [0x40846198cebc2b9a, 0x7aae61ce3453a3e8, 0x0520da203a34e6eb],
    [0x408477cca8650caf, 0x7aee770eefcb6d87, 0x04e0ce5ea1fbcc0c],
    [0x40848e0082107d4a, 0x7b2e8c5e92f159d8, 0x04a0c2a537ee6437],
    [0x4084a4345bb8fffb, 0x7b6ea1bd133ad9ee, 0x0460b6f401d7ac7a],
    [0x4084ba6835624f44, 0x7baeb72a894ecc9a, 0x0420ab4af23147d2],
    [0x4084d09c0f0e2a21, 0x7beecca706615bd7, 0x03e09fa9ffad3118],
    [0x4084e6cfe8b5de8a, 0x7c2ee2327b2a5d4b, 0x03a094113289bb3c],
    [0x4084fd03c2614f72, 0x7c6ef7cd10932112, 0x0360888074bfa2b1],
    [0x408513379c0aebbc, 0x7caf0d76bba92cd8, 0x03207cf7cc337287],
    [0x4085296b75b552fb, 0x7cef232f9125ca33, 0x02e071772dd80154],
    [0x40853f9f4f5c77af, 0x7d2f38f78bd7f123, 0x02a065fe9c626d43],
    [0x408555d329061013, 0x7d6f4ececca0707d, 0x02605a8e067e8e7e],
    [0x40856c0702b02a56, 0x7daf64b5569a5c5a, 0x02204f256a98a4af],
    [0x4085823adc57929f, 0x7def7aab27dfd69a, 0x01e043c4c9a46dd9],
    [0x4085986eb603df06, 0x7e2f90b06900e4db, 0x01a0386c0ea762b0],
    [0x4085aea28fac317f, 0x7e6fa6c501cfa356, 0x01602d1b461ae4da],
    [0x4085c4d669567a10, 0x7eafbce9147fe08c, 0x012021d25e6f520b],
    [0x4085db0a42ff2c16, 0x7eefd31c9dd14708, 0x00e01691594e77fa],
    [0x4085f13e1caaf837, 0x7f2fe95fbb417b5a, 0x00a00b5827cbc444],
    [0x40860771f653ce2f, 0x7f6fffb25f86bd03, 0x00600026d09aca19],
    [0x40861da5cffe0366, 0x7fb00b0a5367476e, 0x001fe9fa8b27f923],
];

pub(crate) static TL: [[u64; 2]; 256] = [
    [0x0000000000000000, 0x0000000000000000],
    [0x3bb06aceafcaf699, 0x3c389951332da0f8],
    [0xbc08908874e7cf5f, 0xbc00a4b871342323],
    [0xbc34ffcceae426f7, 0xbbb1ecf389f4e1cb],
    [0x3c84ebc34cc22f4f, 0xbb8d328ffac3f7ad],
    [0xbcb5d23181c86ca5, 0x3b298a48963b343b],
    [0x3d0a54ae33997bec, 0x3b02b27d74d5e2b0],
    [0x3d4ed3724ec15057, 0xbab723b02b47a002],
    [0xbd5ef3d2b27d318b, 0xba863098ba71cd3f],
    [0xbd9dafca840f6054, 0x3a32a18eedcecd0e],
    [0x3de5ac56fdf3db22, 0x39f863ead7dc0445],
    [0x3e40fde24da43fac, 0xb9b42fb46ff1f236],
    [0x3e890bd1d0f98439, 0x3951090ef61fcd00],
    [0xbe8b9f6238f23666, 0x392f41b9508bc000],
    [0xbeff355b53ba7163, 0x390c1d0fc3e00000],
    [0xbf23edecec95bd27, 0xb8882e5c00000000],
    [0x3f81c6067dbca196, 0x388bfc4000000000],
    [0xbfca2585e249841e, 0x382da00000000000],
    [0xc001ea4f401a237a, 0x0000000000000000],
    [0x401a5dc4fa9d2411, 0x0000000000000000],
    [0xc08baefb695ffbd9, 0x0000000000000000],
    [0x409ca3c0a142ce40, 0xb8b0000000000000],
    [0xc089299545111483, 0x38f0000000000000],
    [0x41464520f059e7d6, 0x0000000000000000],
    [0xc1804c70c6690d06, 0x0000000000000000],
    [0x41b7b97fcc17e8d4, 0x0000000000000000],
    [0x41e58c3230f19eff, 0x0000000000000000],
    [0x424a939ec6223421, 0x0000000000000000],
    [0xc282e45eb2316110, 0x0000000000000000],
    [0xc2c88e6636b240f3, 0x0000000000000000],
    [0x430b4cef1da1d5d2, 0x0000000000000000],
    [0xc327e339a620344a, 0x0000000000000000],
    [0x438091c5336824f9, 0x0000000000000000],
    [0x43c4df2d9154c47a, 0x0000000000000000],
    [0x43d758ef6205a121, 0x0000000000000000],
    [0xc44418a1efe98bab, 0x0000000000000000],
    [0x446b4fa83a196d3e, 0x0000000000000000],
    [0x44c51f15b1c1d96f, 0x0000000000000000],
    [0x44e9c030768f6835, 0x0000000000000000],
    [0x452ee7c914f81c64, 0x0000000000000000],
    [0x45877730570a3fd8, 0x0000000000000000],
    [0x45c9b712e3a55c38, 0x0000000000000000],
    [0x45ff6e7d065cae93, 0x0000000000000000],
    [0xc638c16e27b3f96c, 0x0000000000000000],
    [0x4681d2d00d1352a5, 0x0000000000000000],
    [0xc6a161c8d5cabaea, 0x0000000000000000],
    [0x470768f5b026ea75, 0x0000000000000000],
    [0x473e30c8b9543f51, 0x0000000000000000],
    [0xc756e6b658417995, 0x0000000000000000],
    [0xc73e6dc7bdf696a5, 0x0000000000000000],
    [0x48038cdc947ca647, 0x0000000000000000],
    [0x484bd7257c83a429, 0x0000000000000000],
    [0x48874c3a2c6d3b7a, 0x0000000000000000],
    [0xc8b407d1b51ac29b, 0x0000000000000000],
    [0x48e39184547dd6a3, 0x0000000000000000],
    [0xc94a85a84babd68a, 0x0000000000000000],
    [0xc98ce237fd8c7bd9, 0x0000000000000000],
    [0xc9cfd780c721f974, 0x0000000000000000],
    [0xc9e8ee943fe05ae5, 0x0000000000000000],
    [0xca23185f017f792c, 0x0000000000000000],
    [0xca72e6fff5246abe, 0x0000000000000000],
    [0x4ac84fadfe9c8801, 0x0000000000000000],
    [0xcb0a3115b0a299a3, 0x0000000000000000],
    [0x4b278c7132c77e36, 0x0000000000000000],
    [0x4b86335df1d6ff70, 0x0000000000000000],
    [0xcbbefe70270275ab, 0x0000000000000000],
    [0xcc0601d7ae443ac8, 0x0000000000000000],
    [0xcc4848648afb8f7c, 0x0000000000000000],
    [0x4c770a36cb771e8a, 0x0000000000000000],
    [0xccc5fe13bc5c698b, 0x0000000000000000],
    [0x4d04cc2f6c46e884, 0x0000000000000000],
    [0x4d485143897bfcb3, 0x0000000000000000],
    [0xcd8574380474c2c3, 0x0000000000000000],
    [0x4db3a26181c01c50, 0x0000000000000000],
    [0x4df2135695fef858, 0x0000000000000000],
    [0x4e1a98f09bf039e5, 0x0000000000000000],
    [0xce88e5f124a8b5ca, 0x0000000000000000],
    [0x4ecc099cec491868, 0x0000000000000000],
    [0x4ef393238ff0cf95, 0x0000000000000000],
    [0xcf427f7d0129f616, 0x0000000000000000],
    [0xcf87e862a141287e, 0x0000000000000000],
    [0x4fb0a6aabd7ef2d3, 0x0000000000000000],
    [0x4fd9a192cefed2c8, 0x0000000000000000],
    [0x50304ba9e7be17a2, 0x0000000000000000],
    [0xd07ac9d5056e072f, 0x0000000000000000],
    [0x50aebed498c90296, 0x0000000000000000],
    [0xd10073cf09f94b40, 0x0000000000000000],
    [0xd140e7a8d8dfb6f2, 0x0000000000000000],
    [0x51860457faaff744, 0x0000000000000000],
    [0x51c8c7b06f501a21, 0x0000000000000000],
    [0x51f9f4cd6bbc700d, 0x0000000000000000],
    [0x52494a17df9c7111, 0x0000000000000000],
    [0x528df796a889cad7, 0x0000000000000000],
    [0x52b3186799828a96, 0x0000000000000000],
    [0x53039f0b43095221, 0x0000000000000000],
    [0x534be328b9869745, 0x0000000000000000],
    [0xd372bbd18bec103b, 0x0000000000000000],
    [0xd3c371bb1c77f8d9, 0x0000000000000000],
    [0x5409187e473e7d61, 0x0000000000000000],
    [0xd44660f94553432b, 0x0000000000000000],
    [0x548b6147c209db17, 0x0000000000000000],
    [0x54aecb0b92979a72, 0x0000000000000000],
    [0x5506f168b702c752, 0x0000000000000000],
    [0xd52cef356609e9eb, 0x0000000000000000],
    [0xd54b54ab55486df6, 0x0000000000000000],
    [0xd5baf8f935f7d7bf, 0x0000000000000000],
    [0x5600c00faf62e0e0, 0x0000000000000000],
    [0xd64e15d89f2c724d, 0x0000000000000000],
    [0xd67c9ace414e8aed, 0x0000000000000000],
    [0x569790056ad98112, 0x0000000000000000],
    [0xd708ae45b93f311f, 0x0000000000000000],
    [0xd7337242e076a430, 0x0000000000000000],
    [0xd77ca66feca54132, 0x0000000000000000],
    [0x57c7604774d52754, 0x0000000000000000],
    [0xd7f6a7fdc4304ac1, 0x0000000000000000],
    [0x583b8637cc5db9b8, 0x0000000000000000],
    [0xd88a3235cf1f5a78, 0x0000000000000000],
    [0xd8c0363aee3502d1, 0x0000000000000000],
    [0x58e85a3b78f500e1, 0x0000000000000000],
    [0xd90406fffe30718e, 0x0000000000000000],
    [0xd97de6174e7029d0, 0x0000000000000000],
    [0xd9ce743484ceb813, 0x0000000000000000],
    [0xda0265014585e72f, 0x0000000000000000],
    [0x5a08c853c28cb54f, 0x0000000000000000],
    [0x5a8761fcfdcef49a, 0x0000000000000000],
    [0xdacad4c92d4da216, 0x0000000000000000],
    [0x5ad8862be6323cf0, 0x0000000000000000],
    [0xdb440ad5db43b071, 0x0000000000000000],
    [0x5b8183b55c3e5370, 0x0000000000000000],
    [0xdbc7ecc50aa1b5e4, 0x0000000000000000],
    [0x5c0b52473193b2be, 0x0000000000000000],
    [0x5c314051eda2b5a5, 0x0000000000000000],
    [0x5c7dcf7d3fe8329c, 0x0000000000000000],
    [0x5ca713d6ae750beb, 0x0000000000000000],
    [0x5ce965fb0d5960bd, 0x0000000000000000],
    [0xdd2e91505912444b, 0x0000000000000000],
    [0x5d888df51e9006a1, 0x0000000000000000],
    [0x5d956422c18b1842, 0x0000000000000000],
    [0xde0f383324f3d451, 0x0000000000000000],
    [0xde2a21db13716722, 0x0000000000000000],
    [0xde62c4b4ef450de7, 0x0000000000000000],
    [0xde73ab80887843fc, 0x0000000000000000],
    [0x5f0cc5a7cb69910c, 0x0000000000000000],
    [0xdf3e45df8e510fb6, 0x0000000000000000],
    [0xdf7ee490a7742a19, 0x0000000000000000],
    [0xdfb18b91bd8eec7a, 0x0000000000000000],
    [0x5fe8836bfd42bc10, 0x0000000000000000],
    [0x6024360e3d1d609d, 0x0000000000000000],
    [0xe08eeb5b22d6405f, 0x0000000000000000],
    [0xe0c0fc1574af0f85, 0x0000000000000000],
    [0xe101d925d1ea1f7e, 0x0000000000000000],
    [0x6106906f51679338, 0x0000000000000000],
    [0xe17323927ed9b402, 0x0000000000000000],
    [0x61c413f32cc6add8, 0x0000000000000000],
    [0x61ef4b84588f4b9b, 0x0000000000000000],
    [0x62400ca2bd8d771b, 0x0000000000000000],
    [0xe2675e41da870bfe, 0x0000000000000000],
    [0xe2b71abdf57f3e44, 0x0000000000000000],
    [0xe3008aa0167dafa3, 0x0000000000000000],
    [0x6345ccdd597524a7, 0x0000000000000000],
    [0xe38257c128b16a3b, 0x0000000000000000],
    [0x63a99f6ec0510a89, 0x0000000000000000],
    [0xe3d9cbc7c8bb05dd, 0x0000000000000000],
    [0xe435247bbaa9ad87, 0x0000000000000000],
    [0xe473041f9ad336af, 0x0000000000000000],
    [0x64bd1d7e443e6455, 0x0000000000000000],
    [0x65001bf5ae72de35, 0x0000000000000000],
    [0xe530221ccceecd2c, 0x0000000000000000],
    [0xe562c667b5bcf6e5, 0x0000000000000000],
    [0x65aa7b4e60920109, 0x0000000000000000],
    [0x65de9491f1f0f2cd, 0x0000000000000000],
    [0x661f90ee22052cf4, 0x0000000000000000],
    [0x668a6ca24fe9290d, 0x0000000000000000],
    [0xe6b7265b2e1e0024, 0x0000000000000000],
    [0x6708d9bfeac5d692, 0x0000000000000000],
    [0xe734a7b3e833c947, 0x0000000000000000],
    [0x677571055c21341d, 0x0000000000000000],
    [0xe7c9e1fcda7c36fc, 0x0000000000000000],
    [0x680f9d708bb93e7c, 0x0000000000000000],
    [0xe84e5258660c8389, 0x0000000000000000],
    [0xe88e406c88e3a56b, 0x0000000000000000],
    [0xe8c3b29f64d9fc24, 0x0000000000000000],
    [0x68d23b4636765f1c, 0x0000000000000000],
    [0x693056a65c464405, 0x0000000000000000],
    [0x698c9c4b633bda9b, 0x0000000000000000],
    [0x69a1cd75ebe86c90, 0x0000000000000000],
    [0xe9fee0a21be5723d, 0x0000000000000000],
    [0xe9c96a2eedd5af78, 0x0000000000000000],
    [0xea8214900d86efe0, 0x0000000000000000],
    [0xeab35c5cbc382dba, 0x0000000000000000],
    [0xeaf78dc634f77139, 0x0000000000000000],
    [0xeb2638236a772c9f, 0x0000000000000000],
    [0xeb77421a8ece234d, 0x0000000000000000],
    [0x6bb8cc2f1b6c340e, 0x0000000000000000],
    [0xec07b0b22f29fc26, 0x0000000000000000],
    [0x6bfcecc491832d13, 0x0000000000000000],
    [0x6c6f67ce173b0d05, 0x0000000000000000],
    [0x6c91c7f01f22bee3, 0x0000000000000000],
    [0xecd0bbf8b14a2cf3, 0x0000000000000000],
    [0x6d011c0bdd3625ef, 0x0000000000000000],
    [0x6d8cd9a3fcbca22a, 0x0000000000000000],
    [0x6db2a8fa60062e02, 0x0000000000000000],
    [0xedf4c459f92f4782, 0x0000000000000000],
    [0xee3a5f12240609e8, 0x0000000000000000],
    [0x6e7fac2281dcd501, 0x0000000000000000],
    [0x6ea9bd7e4cf7c3c9, 0x0000000000000000],
    [0x6f02c16a1542ba2f, 0x0000000000000000],
    [0xef3328a72b57dded, 0x0000000000000000],
    [0xef78ccf6f5340f04, 0x0000000000000000],
    [0x6fab01921d47da4d, 0x0000000000000000],
    [0xeffdc1bbfe6fa924, 0x0000000000000000],
    [0xf0444d29a0adf1b2, 0x0000000000000000],
    [0x7082fa8c6902b4e4, 0x0000000000000000],
    [0x70ce0970bcbcfa3d, 0x0000000000000000],
    [0x70f9aa21255fdf03, 0x0000000000000000],
    [0xf138eb87c961f527, 0x0000000000000000],
    [0xf174288c548a39d1, 0x0000000000000000],
    [0x71c8b8b3b9842aed, 0x0000000000000000],
    [0x7207140767725542, 0x0000000000000000],
    [0xf2273aac8e435bfa, 0x0000000000000000],
    [0x728bfdbc5451fd4e, 0x0000000000000000],
    [0xf2b7782ca8657155, 0x0000000000000000],
    [0xf30904f1fbd3be86, 0x0000000000000000],
    [0xf34b1cc912730d28, 0x0000000000000000],
    [0x738ea7f86a0e9014, 0x0000000000000000],
    [0x73c5f00241477d19, 0x0000000000000000],
    [0x74040d4bfddd6e0d, 0x0000000000000000],
    [0x744ffd47987dfc74, 0x0000000000000000],
    [0x7469f24294062598, 0x0000000000000000],
    [0x74be57e3109b9fa4, 0x0000000000000000],
    [0xf50ad8e9c94e3977, 0x0000000000000000],
    [0xf548286a2957e77b, 0x0000000000000000],
    [0xf5724364d6e33b21, 0x0000000000000000],
    [0x75c0cd24e0be255c, 0x0000000000000000],
    [0x76011a1d20168abe, 0x0000000000000000],
    [0xf6437111513f699f, 0x0000000000000000],
    [0x76481482d1952c3a, 0x0000000000000000],
    [0x76cd512d5dd7e3cb, 0x0000000000000000],
    [0x770a0d6f12d9f5a3, 0x0000000000000000],
    [0x76b14ac9b109e7d4, 0x0000000000000000],
    [0xf78e65eb1e11b6b6, 0x0000000000000000],
    [0x7765cf8a97a38767, 0x0000000000000000],
    [0x780cd78e41263d53, 0x0000000000000000],
    [0x7835520738a9eaad, 0x0000000000000000],
    [0x7800270ea47ee714, 0x0000000000000000],
    [0xf8c103da3ae27153, 0x0000000000000000],
    [0x78e0becb01dbdae2, 0x0000000000000000],
    [0x793a4cfe7792b76c, 0x0000000000000000],
    [0xf96f18ce502a948e, 0x0000000000000000],
    [0xf9b6f785ea892c19, 0x0000000000000000],
    [0x7a05df0ca797ea65, 0x0000000000000000],
    [0xfa4591b32bdcaa3c, 0x0000000000000000],
    [0x7a8c833cdff5a68c, 0x0000000000000000],
    [0x7a903f99b046bf52, 0x0000000000000000],
    [0xfafd1b74f3418125, 0x0000000000000000],
    [0x7b53300ca4eeb124, 0x0000000000000000],
];

pub(crate) static U: [[u64; 3]; 256] = [
    [0x0000000000000000, 0x0000000000000000, 0x3ff0000000000000],
    [0x3f8633d9a6f0b004, 0x3f8633f62784d280, 0x3ff0003d9ea4b182],
    [0x3f9633d9a8bd1d79, 0x3f96344bab917c09, 0x3ff000f67c6d8d91],
    [0x3fa0a6e34acf6830, 0x3fa0a7a3b109ead0, 0x3ff0022a9eed93cf],
    [0x3fa633d9b02cb4bd, 0x3fa635a1c3bb9e99, 0x3ff003da0f6336bc],
    [0x3fabc0d00bf620d4, 0x3fabc44ade32b1b9, 0x3ff00604dac869f7],
    [0x3fb0a6e350a8c8b0, 0x3fb0a9e508d905fa, 0x3ff008ab11eeee96],
    [0x3fb36d5e671c3771, 0x3fb37224c824a1f1, 0x3ff00bccc8eb3f6c],
    [0x3fb633d99380441b, 0x3fb63afa65604bb0, 0x3ff00f6a18285549],
    [0x3fb8fa54dc51ba90, 0x3fb9047b59b3b0bc, 0x3ff013831b92f251],
    [0x3fbbc0d00f20d1a3, 0x3fbbcebcea367b7e, 0x3ff01817f2724798],
    [0x3fbe874b4b1b76b0, 0x3fbe99d4b3c450db, 0x3ff01d28c040336e],
    [0x3fc0a6e34c652ff4, 0x3fc0b2ec217dc345, 0x3ff022b5ac17e9e5],
    [0x3fc20a20d40df20e, 0x3fc2196e69123c74, 0x3ff028bee00e2863],
    [0x3fc36d5e77726522, 0x3fc3807c357a591e, 0x3ff02f448b9f454c],
    [0x3fc4d09c0e447a93, 0x3fc4e8202b9b2d92, 0x3ff03646e05258f1],
    [0x3fc633d9a5b2f6b7, 0x3fc650652ae3ac4d, 0x3ff03dc614607172],
    [0x3fc797174c5471b2, 0x3fc7b95619211b0d, 0x3ff045c261df504a],
    [0x3fc8fa54e324fd6c, 0x3fc922fdb2f21ad9, 0x3ff04e3c059e4ec5],
    [0x3fca5d928074d2f3, 0x3fca8d66f0a8dd88, 0x3ff057334168590f],
    [0x3fcbc0d015c8eaf7, 0x3fcbf89caaf334a2, 0x3ff060a859ee0738],
    [0x3fcd240db04ad090, 0x3fcd64a9dce02cb2, 0x3ff06a9b985ff718],
    [0x3fce874b515da9c2, 0x3fced1997bfea48f, 0x3ff0750d49726c2d],
    [0x3fcfea88e881397c, 0x3fd01fbb391fcb96, 0x3ff07ffdbd19699e],
    [0x3fd0a6e3484a77c7, 0x3fd0d725eeb20cc5, 0x3ff08b6d486eedf9],
    [0x3fd1588209aa7ff5, 0x3fd18f124768fcd8, 0x3ff0975c41be16fa],
    [0x3fd20a20cc654634, 0x3fd24785e0950413, 0x3ff0a3cb06375a65],
    [0x3fd2bbbfaad0523e, 0x3fd30086626c39e7, 0x3ff0b0b9f795270e],
    [0x3fd36d5e645fff22, 0x3fd3ba191aa09a3f, 0x3ff0be2974b8b8e7],
    [0x3fd41efd4926f6ff, 0x3fd47443f242e2fd, 0x3ff0cc19eb342ce6],
    [0x3fd4d09c11390d70, 0x3fd52f0c37f56550, 0x3ff0da8bc0d044bf],
    [0x3fd5823ad1e5ba9c, 0x3fd5ea77a09f90b3, 0x3ff0e97f66639b8e],
    [0x3fd633d9ad484133, 0x3fd6a68bf3f16ade, 0x3ff0f8f5520cb8be],
    [0x3fd6e5787aac8c07, 0x3fd7634eaf8fe874, 0x3ff108edf76452f4],
    [0x3fd797174cddd6ca, 0x3fd820c59552f84c, 0x3ff11969d3158fde],
    [0x3fd848b5fc227a5b, 0x3fd8def62e02f4d7, 0x3ff12a6960466b42],
    [0x3fd8fa54e19d6296, 0x3fd99de6921fab7e, 0x3ff13bed2a81eeb5],
    [0x3fd9abf3a3f273ca, 0x3fda5d9c206ad55d, 0x3ff14df5aff5bf73],
    [0x3fda5d9273eee604, 0x3fdb1e1cd20f59b8, 0x3ff160838064ccbe],
    [0x3fdb0f314604d197, 0x3fdbdf6e65615b31, 0x3ff1739729951f9e],
    [0x3fdbc0d01a423a2c, 0x3fdca196ab7fa281, 0x3ff187313e7d4a24],
    [0x3fdc726ee1426721, 0x3fdd649b6aff6ce8, 0x3ff19b5254595f8d],
    [0x3fdd240dafb57c69, 0x3fde288298ac8b0e, 0x3ff1affb08866fd3],
    [0x3fddd5ac800192ce, 0x3fdeed52135af3c4, 0x3ff1c52bf98867c6],
    [0x3fde874b45b14378, 0x3fdfb30fb917e023, 0x3ff1dae5c9120a40],
    [0x3fdf38ea183274ec, 0x3fe03ce0cb8a6add, 0x3ff1f129215b3726],
    [0x3fdfea88e28e7eb0, 0x3fe0a0b6c82c1ace, 0x3ff207f6ab43a80d],
    [0x3fe04e13d938253f, 0x3fe1050cdb187010, 0x3ff21f4f182cf184],
    [0x3fe0a6e33f32e8e2, 0x3fe169e603d12f39, 0x3ff237331aac51c7],
    [0x3fe0ffb2a1b141be, 0x3fe1cf4549568f3e, 0x3ff24fa36a503b40],
    [0x3fe158822b8eadcc, 0x3fe2352de9b8300b, 0x3ff268a0cf76641c],
    [0x3fe1b1517f85c89a, 0x3fe29ba28abec322, 0x3ff2822bf038d749],
    [0x3fe20a20e5b34bf4, 0x3fe302a694708036, 0x3ff29c45a5bf4ab2],
    [0x3fe262f03e111bc2, 0x3fe36a3cfb2b210f, 0x3ff2b6eeafb4539b],
    [0x3fe2bbbf9f463266, 0x3fe3d268f72efac2, 0x3ff2d227e23245f4],
    [0x3fe3148f074438bb, 0x3fe43b2da89b3e1e, 0x3ff2edf20e6dcd89],
    [0x3fe36d5e750aae26, 0x3fe4a48e355b8387, 0x3ff30a4e0a422e0f],
    [0x3fe3c62dce1be859, 0x3fe50e8da982bac4, 0x3ff3273ca7849a6b],
    [0x3fe41efd58eff412, 0x3fe5792f89eeba90, 0x3ff344bedc4be853],
    [0x3fe477cca35a487c, 0x3fe5e47682b42eb4, 0x3ff362d565cd5b4c],
    [0x3fe4d09c29ecd609, 0x3fe65066648fbb9a, 0x3ff3818155f39d3a],
    [0x3fe5296b73d51261, 0x3fe6bd01dc073899, 0x3ff3a0c36f41ca63],
    [0x3fe5823ad23ec1ba, 0x3fe72a4c907541f8, 0x3ff3c09cbea7a9bc],
    [0x3fe5db0a4e2985e8, 0x3fe79849d752c1ab, 0x3ff3e10e3d2ff4de],
    [0x3fe633d9aa6eddfa, 0x3fe806fcb40d044c, 0x3ff40218ce62e7b4],
    [0x3fe68ca90c6740c3, 0x3fe87668a98839e9, 0x3ff423bd7e621fcd],
    [0x3fe6e57875c4aa11, 0x3fe8e69114469bf9, 0x3ff445fd511707de],
    [0x3fe73e47de3bb7c6, 0x3fe9577949c798f1, 0x3ff468d94b2d9cc3],
    [0x3fe7971741ea503f, 0x3fe9c924aab25b83, 0x3ff48c5277913942],
    [0x3fe7efe6b1e54387, 0x3fea3b96b886135a, 0x3ff4b069ee6410b5],
    [0x3fe848b617db07ec, 0x3feaaed2c80aa79d, 0x3ff4d520bc98e186],
    [0x3fe8a18576fcbe30, 0x3feb22dc54c18d88, 0x3ff4fa77fe1df058],
    [0x3fe8fa54d96985d0, 0x3feb97b6e99da09d, 0x3ff52070d6c8d784],
    [0x3fe9532447cf6b5c, 0x3fec0d661650ebfb, 0x3ff5470c6ef3f0ce],
    [0x3fe9abf3a9ec54ed, 0x3fec83ed452a2f80, 0x3ff56e4be5729518],
    [0x3fea04c320307fd9, 0x3fecfb503287b017, 0x3ff5963076ff1414],
    [0x3fea5d927b80c960, 0x3fed7392368e187e, 0x3ff5bebb41a334c0],
    [0x3feab661e4dcd2fb, 0x3fedecb726d989fe, 0x3ff5e7ed903870e3],
    [0x3feb0f3143cf5e5c, 0x3fee66c28736592a, 0x3ff611c894c0ee58],
    [0x3feb6800bbb04412, 0x3feee1b8347b1afe, 0x3ff63c4da272bde9],
    [0x3febc0d0083b9e94, 0x3fef5d9b82f0bb69, 0x3ff6677ddfeb0e3e],
    [0x3fec199f826ee45b, 0x3fefda70a9042719, 0x3ff6935ac5203a3b],
    [0x3fec726edc456b4f, 0x3ff02c1d7d6291e9, 0x3ff6bfe57d8a4393],
    [0x3feccb3e6dde3caa, 0x3ff06b7f5f270fe6, 0x3ff6ed1f8cb68502],
    [0x3fed240dabda1318, 0x3ff0ab5f7e4ed4a5, 0x3ff71b0a07b32f34],
    [0x3fed7cdd152c608b, 0x3ff0ebc021d2f2a3, 0x3ff749a69155b5e6],
    [0x3fedd5ac752265aa, 0x3ff12ca313a6bde6, 0x3ff778f6756135a0],
    [0x3fee2e7bf50cc625, 0x3ff16e0a65f5b5a5, 0x3ff7a8fb3688d299],
    [0x3fee874b5df6fb7e, 0x3ff1aff7e81fff22, 0x3ff7d9b6290db0d2],
    [0x3feee01ab8c1d302, 0x3ff1f26d9c36b2e9, 0x3ff80b28c8b43958],
    [0x3fef38ea22c82bae, 0x3ff2356d981ba455, 0x3ff83d54a2b6bb91],
    [0x3fef91b9771f089e, 0x3ff278f9c3f56ca6, 0x3ff8703b24968d81],
    [0x3fefea88e813aa91, 0x3ff2bd144e5f8dc1, 0x3ff8a3ddf34d646e],
    [0x3ff021ac24954c52, 0x3ff301bf21ecbcef, 0x3ff8d83e82dff514],
    [0x3ff04e13d9c92e68, 0x3ff346fc62edf0c8, 0x3ff90d5e7582573b],
    [0x3ff07a7b811ae1b0, 0x3ff38cce099b598e, 0x3ff9433f4dfa7b51],
    [0x3ff0a6e349fabf1f, 0x3ff3d3367ab7a06d, 0x3ff979e2e5584443],
    [0x3ff0d34aedcc3078, 0x3ff41a37648a1a5b, 0x3ff9b14a897bc0a7],
    [0x3ff0ffb2a42eb990, 0x3ff461d3428c320b, 0x3ff9e9782a12dc4a],
    [0x3ff12c1a4fa438e8, 0x3ff4aa0c0ce5e191, 0x3ffa226d52b5f5a5],
    [0x3ff158821891b2db, 0x3ff4f2e431f7c5f9, 0x3ffa5c2bee6acd49],
    [0x3ff184e9c4cc620b, 0x3ff53c5d836e51b0, 0x3ffa96b56e587ae3],
    [0x3ff1b15175448e0c, 0x3ff5867a6d32c0bf, 0x3ffad20bc024850c],
    [0x3ff1ddb927f0cada, 0x3ff5d13d26dc6a1a, 0x3ffb0e30aa4d7b91],
    [0x3ff20a20c6aa517d, 0x3ff61ca7ca91ed28, 0x3ffb4b25dd975f4c],
    [0x3ff2368888c49d68, 0x3ff668bcfb883326, 0x3ffb88ed7be9d421],
    [0x3ff262f045c66d9b, 0x3ff6b57ebf1b8ee1, 0x3ffbc78929a82b57],
    [0x3ff28f57fb629cde, 0x3ff702ef6040c0e7, 0x3ffc06fac57727b1],
    [0x3ff2bbbfae83fc8e, 0x3ff751113bcb54fc, 0x3ffc47443ec26c4f],
    [0x3ff2e8275d99a639, 0x3ff79fe6a8a20455, 0x3ffc88678240c2be],
    [0x3ff3148f0ac8a94f, 0x3ff7ef7209a59a2e, 0x3ffcca6688a3f4ff],
    [0x3ff340f6c2adca41, 0x3ff83fb5da54a9f7, 0x3ffd0d436141c7cc],
    [0x3ff36d5e74c44790, 0x3ff890b4672e8642, 0x3ffd50fff66131bc],
    [0x3ff399c625e184ae, 0x3ff8e27028b45aea, 0x3ffd959e58eb91c8],
    [0x3ff3c62dd7d54b10, 0x3ff934eb97c7422d, 0x3ffddb209c34dcbf],
    [0x3ff3f295899d0e98, 0x3ff988292ddbf3ad, 0x3ffe2188d610f991],
    [0x3ff41efd3bc6ccf9, 0x3ff9dc2b6d2626e0, 0x3ffe68d925b17f77],
    [0x3ff44b64eaa1de81, 0x3ffa30f4d5a9d7e7, 0x3ffeb113aa5c8c16],
    [0x3ff477cca90e99d2, 0x3ffa868818d6aa28, 0x3ffefa3aaf7ee5c5],
    [0x3ff4a4345a0b34b6, 0x3ffadce791f802f3, 0x3fff445038d43f2b],
    [0x3ff4d09bf422e1b5, 0x3ffb3415c6f4b72b, 0x3fff8f5670102c5e],
    [0x3ff4fd03c27e95f0, 0x3ffb8c15ebae7504, 0x3fffdb5017002eb7],
    [0x3ff5296b7d08e393, 0x3ffbe4ea18030985, 0x4000141f7e461c68],
    [0x3ff555d323f8e424, 0x3ffc3e94f778902d, 0x40003b12b82fb6b9],
    [0x3ff5823ad0b8ef69, 0x3ffc99196fa5e576, 0x40006282fb51189b],
    [0x3ff5aea29253a95a, 0x3ffcf47a592edcb1, 0x40008a71853d8b76],
    [0x3ff5db0a41c2a7a4, 0x3ffd50ba23af286a, 0x4000b2df667af392],
    [0x3ff60771f6b5daca, 0x3ffdaddbc6893f46, 0x4000dbcdebcba6d6],
    [0x3ff633d9a84779ae, 0x3ffe0be1fc7b32db, 0x4001053e484b96c3],
    [0x3ff660415d058621, 0x3ffe6acfa79c93d4, 0x40012f31c1466062],
    [0x3ff68ca910cae844, 0x3ffecaa79a50e8b6, 0x400159a995fbb397],
    [0x3ff6b910b91e7a06, 0x3fff2b6c9fd4e6ec, 0x400184a7034b286f],
    [0x3ff6e578721042cb, 0x3fff8d21ded7e9c7, 0x4001b02b6f987583],
    [0x3ff711e02af0b799, 0x3fffefca23c1235b, 0x4001dc381a05c484],
    [0x3ff73e47e0880078, 0x400029b42f9b3d94, 0x400208ce529ca781],
    [0x3ff76aaf8a2ab691, 0x40005bffbe49990d, 0x400235ef67ceeda8],
    [0x3ff797174109567c, 0x40008ec95ddeaf36, 0x4002639cced7b822],
    [0x3ff7c37f15f629d9, 0x4000c212a98283d3, 0x400291d7f9a79850],
    [0x3ff7efe69ca938e5, 0x4000f5dcae5b408d, 0x4002c0a1dab1c2ff],
    [0x3ff81c4e69bd9ff9, 0x40012a29a88251b1, 0x4002effc76cb5060],
    [0x3ff848b6325176e2, 0x40015efad3c0f2e5, 0x40031fe8ec1981c6],
    [0x3ff8751dc303f355, 0x4001945188bd5d35, 0x40035068731f5d02],
    [0x3ff8a1857876e063, 0x4001ca2fd13d90e7, 0x4003817ce63852e4],
    [0x3ff8cded2771f5ab, 0x4002009718484b8f, 0x4003b327904009d2],
    [0x3ff8fa54db4ff135, 0x400237890ec9e3f5, 0x4003e569fc6ff481],
    [0x3ff926bc894050be, 0x40026f074e91f42c, 0x40041845a1a3f9b8],
    [0x3ff953244211d893, 0x4002a7139828aaf2, 0x40044bbc1af17fae],
    [0x3ff97f8c030d80fa, 0x4002dfaf98321b5a, 0x40047fcef1fb45f8],
    [0x3ff9abf3c99be63b, 0x400318dcffaca8a1, 0x4004b47fb5196c34],
    [0x3ff9d85b616d38a0, 0x4003529d42d8ba00, 0x4004e9cfbb34dfdd],
    [0x3ffa04c314964588, 0x40038cf27e827ca6, 0x40051fc0f77a3640],
    [0x3ffa312acd2acb44, 0x4003c7de57d0c7a0, 0x40055654ef7733fb],
    [0x3ffa5d927b0d2725, 0x400403627f1cccdf, 0x40058d8d33a23ab1],
    [0x3ffa89fa2ed12739, 0x40043f80d4f1cdc4, 0x4005c56b81d22235],
    [0x3ffab661e49a7e19, 0x40047c3b234e8076, 0x4005fdf183aade8a],
    [0x3ffae2c98bdad4c6, 0x4004b993270c989b, 0x40063720d73060be],
    [0x3ffb0f31409ed2aa, 0x4004f78adf6647ee, 0x400670fb58f32df0],
    [0x3ffb3b98f8d3e99a, 0x400536241bf681cb, 0x4006ab82b9d35a80],
    [0x3ffb680080bd6e86, 0x4005756074ffc709, 0x4006e6b877676cd6],
    [0x3ffb9468664f02b3, 0x4005b5429cb9b200, 0x4007229f181715c1],
    [0x3ffbc0d015d3faee, 0x4005f5cbab9114f0, 0x40075f37a2f073bb],
    [0x3ffbed37b61a6a9e, 0x400636fdc9782725, 0x40079c841e02acb3],
    [0x3ffc199f6de3162a, 0x400678db25af6521, 0x4007da86972655ec],
    [0x3ffc460733bd971f, 0x4006bb65ae630c39, 0x40081940dfb59432],
    [0x3ffc726ed59f7ac1, 0x4006fe9f189d0686, 0x400858b4939f2525],
    [0x3ffc9ed692eb45b3, 0x40074289c9ec1968, 0x400898e3f5fdd7a6],
    [0x3ffccb3e411b470e, 0x400787278cb00dca, 0x4008d9d0b80a65f4],
    [0x3ffcf7a5fb981325, 0x4007cc7a9bb6977b, 0x40091b7cf5db5a55],
    [0x3ffd240db51193b6, 0x40081284f874a087, 0x40095dea95e15a0b],
    [0x3ffd5075667d41b8, 0x40085948b312b9cc, 0x4009a11b8d01c1a2],
    [0x3ffd7cdd1f3a32d6, 0x4008a0c8051b99d4, 0x4009e511f804693e],
    [0x3ffda944cc155361, 0x4008e904f63c7f03, 0x400a29cfc4e258ef],
    [0x3ffdd5ac7cab4322, 0x40093201cc0ff8c1, 0x400a6f571d09efb0],
    [0x3ffe02142e5dd656, 0x40097bc0b496e072, 0x400ab5aa140d5bee],
    [0x3ffe2e7bc4344e63, 0x4009c643b707d979, 0x400afcca98fb555d],
    [0x3ffe5ae37622082e, 0x400a118d6f33eb4e, 0x400b44bb294f0e3d],
    [0x3ffe874b50c1d9fe, 0x400a5da03831ba06, 0x400b8d7e0577368b],
    [0x3ffeb3b3016372bb, 0x400aaa7dce43428c, 0x400bd714d65d3e27],
    [0x3ffee01a9dda5dad, 0x400af828a59294e2, 0x400c2181f53f326c],
    [0x3fff0c826f66d997, 0x400b46a395612348, 0x400c6cc81b18d60e],
    [0x3fff38ea0999ea5e, 0x400b95f03a75b482, 0x400cb8e8d3d28fd2],
    [0x3fff6551c6975ca6, 0x400be6119806970c, 0x400d05e703be7bcd],
    [0x3fff91b963605abf, 0x400c37099e71e421, 0x400d53c487cce6b9],
    [0x3fffbe213bca0067, 0x400c88db659ecbb3, 0x400da284599a150c],
    [0x3fffea88df97bf90, 0x400cdb889527831d, 0x400df22810df1203],
    [0x40000b785dd10f72, 0x400d2f1474a47642, 0x400e42b2d65ef6c6],
    [0x400021ac25d1ef66, 0x400d83808e24427a, 0x400e942625f1dc82],
    [0x400037dfe6f26636, 0x400dd8cfdfa3f40d, 0x400ee684e26ccb32],
    [0x40004e13df1efa17, 0x400e2f05eb161312, 0x400f39d26f050449],
    [0x40006447c012d64a, 0x400e86241a8a7bf8, 0x400f8e1029b5d8e5],
    [0x40007a7b9219ffef, 0x400ede2d2b3d5001, 0x400fe340b86b0359],
    [0x400090af607bd6c6, 0x400f3723eed54353, 0x40101cb36ab1f7c0],
    [0x4000a6e32e5fcfed, 0x400f910b1eee68f4, 0x401048429212b4fe],
    [0x4000bd171a7c237e, 0x400febe5ee4557dd, 0x4010744f5f173e58],
    [0x4000d34aed4e9f14, 0x401023db1ae9145d, 0x4010a0dab7128ea0],
    [0x4000e97ecbb7e9f9, 0x4010523fa831feb4, 0x4010cde63aa6bccb],
    [0x4000ffb2b3d436f0, 0x4010812201157a5a, 0x4010fb7341acf047],
    [0x400115e67d11ce25, 0x4010b0833852848e, 0x40112982d7098bc2],
    [0x40012c1a66c9c096, 0x4010e065421965dc, 0x40115816e1013d07],
    [0x4001424e2277b96f, 0x401110c8e56c8f06, 0x401187302123c16b],
    [0x400158820c75cee0, 0x401141b060500d77, 0x4011b6d0c6261145],
    [0x40016eb5e7cd41f3, 0x4011731ca643949a, 0x4011e6f9bd3b7da1],
    [0x400184e9c729b846, 0x4011a50f5d25e14a, 0x401217aca1760fd0],
    [0x40019b1dae0ff6ab, 0x4011d78a0e051f75, 0x401248eaf2148676],
    [0x4001b1517caef957, 0x40120a8df4c08f6d, 0x40127ab5e332c21e],
    [0x4001c78553e32347, 0x40123e1ce53972d7, 0x4012ad0f3d74a3ab],
    [0x4001ddb909a1ae42, 0x401272380a0092a2, 0x4012dff8245f0a3f],
    [0x4001f3ed0ff5a611, 0x4012a6e201d9c828, 0x4013137327646f57],
    [0x40020a20e33237e3, 0x4012dc1b2b302bd1, 0x40134780a2ddb4db],
    [0x40022054ab2c5f21, 0x401311e57d14ad38, 0x40137c2282b0276a],
    [0x400236887f3161fe, 0x40134842ce53f769, 0x4013b15a938624a4],
    [0x40024cbc5d6d5733, 0x40137f34be0f1061, 0x4013e72a6bcae166],
    [0x400262f03bb3e1eb, 0x4013b6bcdab69dce, 0x40141d9391bbb221],
    [0x40027924159e429d, 0x4013eedcc4d7d297, 0x401454979d7b6ec7],
    [0x40028f57f256b7e3, 0x401427963ecc49b9, 0x40148c38487d43ea],
    [0x4002a58bc6b08b40, 0x401460eae0b7eaa0, 0x4014c47722fe60ba],
    [0x4002bbbfb166f167, 0x40149adcb420bd0d, 0x4014fd562cab8c29],
    [0x4002d1f382ea6d2e, 0x4014d56cfb18a874, 0x401536d6a19e35d1],
    [0x4002e8275d236b97, 0x4015109dd1756c31, 0x401570fa93dbfc5c],
    [0x4002fe5b33be487e, 0x40154c70de7af432, 0x4015abc3a327faa1],
    [0x4003148f023a6bbe, 0x401588e7e250eea5, 0x4015e73387dcc053],
    [0x40032ac2dde293e1, 0x4015c604e8e68ef6, 0x4016234c45037596],
    [0x400340f6c3a6b2c3, 0x401603c9c18d51ce, 0x4016600fa2411541],
    [0x4003572a9d7666c7, 0x401642380a9408aa, 0x40169d7f3724b827],
    [0x40036d5e767ad2ad, 0x40168151c3a9c12d, 0x4016db9cfb3125c8],
    [0x400383924e2f5214, 0x4016c118d14443ef, 0x40171a6acb4cf446],
    [0x400399c621b78e6d, 0x4017018f162936fa, 0x401759ea82dd254f],
    [0x4003affa08f3fc66, 0x401742b6c8e99087, 0x40179a1e5001448a],
    [0x4003c62dd7ccac4e, 0x401784915dc0d362, 0x4017db07a181c7c6],
    [0x4003dc61b5627925, 0x4017c7214386b082, 0x40181ca8dd492233],
    [0x4003f295953c0049, 0x40180a6856577ac9, 0x40185f03d8ce6b52],
    [0x400408c9701ca0c6, 0x40184e6886583b36, 0x4018a21a7d68ab45],
    [0x40041efd4028b69a, 0x40189323cc96b20b, 0x4018e5eebd59afc0],
    [0x400435312322918e, 0x4018d89c9701e5a8, 0x40192a82fe68bcfc],
    [0x40044b65018c33d4, 0x40191ed4b3eaec19, 0x40196fd908fad690],
    [0x40046198afe18c5d, 0x401965cdb3ddf20a, 0x4019b5f2688144bb],
    [0x400477cca9bd1a24, 0x4019ad8b4611bdd1, 0x4019fcd2c09fc7fb],
    [0x40048e008ed9cc19, 0x4019f60e5edf8922, 0x401a447b02cfbf34],
    [0x4004a43451bdb06f, 0x401a3f58fde7eff0, 0x401a8ced28983037],
    [0x4004ba6833ba59e7, 0x401a896e2f28d89e, 0x401ad62c34f63cd1],
    [0x4004d09c0f47afd4, 0x401ad44fb156485b, 0x401b2039e19a5d66],
    [0x4004e6cfe8b2083b, 0x401b1fffd33d8628, 0x401b6b1876c7dad2],
    [0x4004fd03b80f7ac6, 0x401b6c80c0343573, 0x401bb6ca19cf2073],
    [0x400513379a1812ab, 0x401bb9d528ef2120, 0x401c0351741d81b1],
    [0x4005296b7b80f8fc, 0x401c07ff1ee06455, 0x401c50b091ae8dc6],
    [0x40053f9f4b49a8e3, 0x401c5700bf31f7a0, 0x401c9ee98a2a7482],
    [0x400555d326c961cb, 0x401ca6dcd28210bc, 0x401cedff1f1bd3b8],
    [0x40056c06f428bc7c, 0x401cf79562d54d49, 0x401d3df355751889],
    [0x4005823acf21a17d, 0x401d492d42b23ab3, 0x401d8ec8f8df23ca],
    [0x4005986ec789f781, 0x401d9ba7235145d2, 0x401de082b435dac5],
    [0x4005aea27b72ad74, 0x401def0411d1d4d4, 0x401e3321921ab733],
    [0x4005c4d67081d394, 0x401e434885f32266, 0x401e86aa001c51ba],
    [0x4005db0a47657d24, 0x401e9875a11f5d89, 0x401edb1d1d28ad56],
    [0x4005f13e18f7e376, 0x401eee8e508fae79, 0x401f307dd00b4c35],
    [0x40060771f92133ba, 0x401f45957932a221, 0x401f86cef785dca5],
    [0x40061da5cdc19ac9, 0x401f9d8d5325e4cc, 0x401fde12c712bbdd],
];

pub(crate) static UL: [[u64; 2]; 256] = [
    [0x0000000000000000, 0x0000000000000000],
    [0xbb3cc125d97df011, 0xbb9e6bae12de82ce],
    [0x3b53ccb2ec84fef7, 0xbba214c0f6243bf1],
    [0x3b6328b4447edb91, 0xbba37c82afda7a01],
    [0xbb474d7fe5518d25, 0xbb511f607ae2cde9],
    [0xbb62e6777af8f956, 0xbba722cdf5535915],
    [0xbb74724f85331deb, 0xbb8bc554e7043e93],
    [0xbb7472b41d2ad023, 0x3b97288b26e249e1],
    [0xbb79ed70f51c86bd, 0xbba8f18378e01e5a],
    [0xbb6a6d5c74d86fbf, 0xbbbc4c5abf61be2f],
    [0xbb58e2f60ccf0e00, 0x3baeef11e1433e5e],
    [0xbb548ae0c5dc539e, 0x3bb893cdf7644233],
    [0x3b66f1ee297d3926, 0x3bbdbd2342cdb67c],
    [0xbb8ad7ce28818a42, 0xbbb001de84c33ebe],
    [0x3b85a95ca4cd554b, 0x3bb5325fb0983637],
    [0x3b76b57ac86c26a0, 0x3bb055cf2d647ce8],
    [0xbb8e38790b732c1e, 0xbba8ef89ce2deaf8],
    [0xbb713d88555cac7e, 0xbb80c000fa79a590],
    [0xbb8755a4311e4e9f, 0xbbba285e9c8a99c1],
    [0x3b7338d9ce94afca, 0xbbae69c8f1ed4087],
    [0xbb3b92cde07ec9ff, 0xbbac2dad21d7af50],
    [0xbb8f00e1d3d82fb4, 0x3ba854ab1b25b9a1],
    [0x3b6085e8eb198df9, 0x3ba8c42c2affc91e],
    [0x3b528e352f80f835, 0x3ba6560d765ba457],
    [0x3b802ef6173e691e, 0x3bb82e6789526f88],
    [0xbb7017ef0841fc9c, 0xbbb2acc54b4e9bad],
    [0xbb7f12b54da4033f, 0xbbb4310364c95805],
    [0x3b8d0b3fd87e7afa, 0x3b6367e3ccd75e3c],
    [0xbb9938b79aff153c, 0x3bb372447031d65d],
    [0xbb99f09c78d32486, 0xbb9e181580c918a3],
    [0x3b87c129882a5acd, 0xbbb7c85c981c523f],
    [0xbb96a180abacb430, 0x3b99008be87e0532],
    [0xbb90c526fe4ad3eb, 0xbb9f2db715e739b1],
    [0x3b973cfba2fc09ff, 0xbbb7215e5a6ca2d5],
    [0xbb9a14c16f18882e, 0x3bb88eef9e5b3b48],
    [0x3b9ef5358b0ceb7e, 0x3bb16331868d74be],
    [0x3b8cbe0d9b08abd7, 0xbb866b4ec4fdd4b1],
    [0xbb8bf3acf5f270dc, 0x3b9685bbecc9be3b],
    [0x3b90dc7f2135ecde, 0x3bb1df766fd7d268],
    [0x3b6090f84b454a71, 0xbbb6412b8d647b4c],
    [0xbb9d937e126f1f3c, 0x3bb82467d5d48df0],
    [0x3b62738b7a69d56d, 0x3bb062d5e7880c54],
    [0x3b94d6b12b0c8c0a, 0xbba6e28f42d0960f],
    [0x3b9049d671ae067a, 0x3ba1612ff6f67f64],
    [0x3b8cb771c76288f6, 0xbbb82ec50b7f0089],
    [0x3b952ca9d90f7528, 0xbba75f26f51d468c],
    [0xbba6a2eaca17a392, 0x3bb4853472d30cdf],
    [0xbbaf0887113aa8f0, 0x3bb4bcfa25631485],
    [0x3bae6d0ace277870, 0xbbb7edef64fc2f80],
    [0x3b849cd697517a38, 0xbba75d1f59cf8abf],
    [0xbba73efa25622ad0, 0xbbba952d25b21519],
    [0x3bab9e75c4884d9f, 0x3bb06e3134e2dc3d],
    [0x3b8265ec3d975f37, 0xbbba74fc524a225c],
    [0xbb9017e9656aae28, 0xbbbd51eaaa1fbcf4],
    [0x3b8d5dcf496804ec, 0xbbb3420021010f52],
    [0x3ba68332b7843a68, 0x3b7e5ee05a2ff4c6],
    [0xbb9c393559e63409, 0xbbafd6cc2fbaedbf],
    [0xbbae0117d5ce5d8e, 0xbb9f3f817b59cd74],
    [0xbb92a221ac26ad0e, 0xbbba5a5863196c38],
    [0x3b762165ba7420ca, 0xbbb383e8717ad9af],
    [0x3b955ceaa5fe7bd7, 0xbbb14122ad82aea2],
    [0xbb6e1530f3507293, 0xbb9dd9736fc563d9],
    [0xbb8773970fbd9fe5, 0xbba5f4b88b364a8c],
    [0x3baf1e0036196355, 0x3b843d7ecc5e4b51],
    [0x3b84f59720a80328, 0x3bb86ee268ac871a],
    [0x3b80dce78b1dac70, 0xbb89d8e94061981a],
    [0xbba2636a58d352a1, 0x3b9eada01ac29d3f],
    [0x3ba1558d5ba99a0e, 0x3baf10e345d561ae],
    [0xbb75e7646f3fa106, 0x3bb9a49f50b08977],
    [0x3bacfec9abbfa9c5, 0x3bbf2825f240381b],
    [0xbba062ec8f4ff2a3, 0xbba5c68279d24b9f],
    [0xbba4b8df7407da8f, 0xbb9c48b19e1c19aa],
    [0x3b9c45158849e884, 0xbbb0a01a7dd0e4f7],
    [0xbb7d0fefbcc2b263, 0x3bbf0ff44eb35c4f],
    [0x3b89a077f6891fcf, 0xbbb0af987229435a],
    [0x3baaf925ad7f864d, 0x3bb28a8b730e6b50],
    [0x3b99d3fe6fbd6c88, 0xbb95b37df08c8feb],
    [0x3b90fd94868678b4, 0x3b836ac7d063279c],
    [0xbb9d03d2796cf2fc, 0xbbb55a6897babd2c],
    [0x3b9913f2ad422e09, 0xbb9cb40ad3af1931],
    [0x3ba27858c8a739f0, 0xbbab14997740ce95],
    [0xbb867ac0198a59e0, 0x3bb2cd04e4856ba8],
    [0x3bb4b3f65d0e38b3, 0xbbb79409c655d428],
    [0x3bb6eeaf79a53e94, 0x3b939950856a04a5],
    [0x3ba804dbffe81dff, 0x3ba07ffef71a553f],
    [0x3ba94edb6860ae1d, 0xbb91f9af00117f2e],
    [0xbb9f202bd7457504, 0x3bb078badd30f3dc],
    [0xbbb5d39749775edb, 0xbba66c9cc5599922],
    [0x3bbd72c037a3f192, 0x3bbc1d10046ca1f3],
    [0xbbbb565b1cb2913b, 0xbb9766b3b10f8926],
    [0x3bb276bb82261dcc, 0xbbb9a5b34d1f2bbb],
    [0xbbae0dea88724c83, 0xbbb160398c91afd3],
    [0x3bad02a72c775956, 0x3bbdc609bd3a8dd1],
    [0x3b9a46da87cd2481, 0xbbaf9c6cd1a01069],
    [0x3bb06ccc6ea22231, 0xbb759c004d5dac0a],
    [0x3bbd57b87eeb3095, 0x3bb4178add240981],
    [0x3b8151c6e2eb8896, 0xbbb27bcaa4710b71],
    [0x3bb6f54e01a0f24b, 0xbba7ce4e0b77ab88],
    [0x3ba1e875f53e86a4, 0xbbb35ef7561ffee3],
    [0x3bb56869e7c9b3eb, 0x3babb23a55e28290],
    [0xbbae0837b42a9db5, 0x3bade3c949b6cb0f],
    [0xbbb684ffc2464163, 0xbbbe6e9c6443c6bb],
    [0xbba2b328b649f841, 0x3bb98cefd79969a4],
    [0x3ba70b78cfcdc386, 0xbba6bfc485a682b7],
    [0x3bab9789a650fb4f, 0xbbb14bcffed52ae6],
    [0xbbbbd6db7b787a16, 0xbbb2c64b6ad16494],
    [0x3bb686de4ca7a603, 0x3bbfc7fbe61c4358],
    [0x3ba6f1e71e9381cb, 0x3bb2888ca77f1941],
    [0x3b9018ffc3922ca2, 0x3b9c7d4555d4515f],
    [0xbbb6bb83a2870605, 0xbbba13872cbb1c49],
    [0xbbb3a4809092959c, 0x3baa8727e5bb1359],
    [0x3b744b989570f03a, 0xbbb773b49090f1b5],
    [0x3babf9d415f380b1, 0x3bbfcdb911aba776],
    [0xbbb78947e8ec86c4, 0x3b92d732d1e0ff1b],
    [0x3b7c450bf26fdb00, 0x3b9b393f363cfe96],
    [0xbb958ede1e4d08ca, 0xbbbdc557a7f3a0cd],
    [0xbb83ade92f2f20fe, 0x3bb7cbf70028ac32],
    [0x3ba6af2850ec7013, 0xbbb5debce1e979ea],
    [0xbbb77a4dd2237364, 0xbbaab9ddaa5c91f9],
    [0x3bb472c4b81ec1f9, 0xbb90376f24f0f5e8],
    [0x3bbcb226e4e146b2, 0xbbb34774e5eb5a55],
    [0x3b760d3cc5e78b84, 0xbbb7fead8dab9439],
    [0xbb55b0dd5b349046, 0xbbbc89666d7248f0],
    [0xbb6cabc2a182dcd5, 0x3bc6cb9c9cee1868],
    [0xbbb21dde36f84edf, 0xbba3fd8d54f2e657],
    [0x3b7152f0a1b8f8ab, 0xbbc7824d08cdd11b],
    [0x3ba2f1bcee91346a, 0x3bcfe7064492e458],
    [0xbba8ff2976cd5b7d, 0x3bca76b264983685],
    [0xbbb66d380dbfa8e8, 0xbbaf53c0d3e6b761],
    [0xbb94221057302986, 0x3bc342a84158f00a],
    [0x3bbbbd7b52fd89ac, 0xbba33b68f100c1d3],
    [0xbba253318bf58a74, 0xbbb9b22f6dbb1975],
    [0x3bbc2d45ba3c8925, 0x3bbafd14d878e80e],
    [0xbb6fae47c181ae8a, 0xbba8a8e55cd9ea65],
    [0x3bb7d9b44aca9ffd, 0x3bc5ab36aacda9fd],
    [0x3bca1635f46c3c73, 0x3bcd53d35bb7af3d],
    [0xbbcf159008ccb386, 0xbb4e692594bd6058],
    [0x3bbc560f914dcfa8, 0xbb86a5546744d556],
    [0xbbc25d0fc04677e9, 0x3bc48d56ce183d72],
    [0x3bc026c967d0fa0a, 0xbbc305f8f6584843],
    [0xbbc61f689e09b7b7, 0x3bc7052c5a36e078],
    [0x3bbe13ab843ae38a, 0xbbcb1026fbd88c71],
    [0xbbc35d3b72cc77f4, 0xbbc039d6e3e9bbdf],
    [0xbbb1acd45619b29c, 0x3bbf264e8ef6843e],
    [0x3b8227b7e65039b5, 0x3bc89e3d02473104],
    [0x3bb3c53742654ce8, 0x3bc298967bcae5c0],
    [0xbbc8e5edf27913ca, 0xbbc079f21dea984b],
    [0x3b95ec829c413190, 0xbbbb757f020a361a],
    [0xbbc473a4895ce42c, 0xbbc46fd4f875706d],
    [0xbbbf8e48fb8b7098, 0xbbba3a6adbcdf3c6],
    [0xbbcd9115c90c9c76, 0xbbc8b7d870b2e166],
    [0x3bbebefdebbec6c8, 0x3bcea48dc475199c],
    [0xbb8f514e16df0e60, 0x3ba63610d3acf335],
    [0x3bcb00c6d5b06dce, 0x3bc28cbba85bb10b],
    [0xbbbecbd3229ccd48, 0xbbc24112f4e34c10],
    [0x3b9f4c87d77a1287, 0x3b929e0a9a2316c4],
    [0x3bb06aab3d7df0b0, 0xbbcff923267b2b20],
    [0xbbca9cbb30d5242a, 0x3bc83a3104a841d2],
    [0x3bc8e094706efef6, 0x3bcf3124f93ce90a],
    [0x3b8f7f4e2b3e4099, 0xbbc5ca141eb05e94],
    [0x3bc3278e2eac40d2, 0x3bced3827305e39f],
    [0x3bc85d93b76d923d, 0x3bbc09af68541b6f],
    [0xbb814d580842369a, 0xbbcaddc56604c424],
    [0x3bcecf4270fc7610, 0x3bc7bafa99787b3b],
    [0xbbbfd4f5a6592a3d, 0x3bc002c0b6a184b9],
    [0x3bb842e12a12ba02, 0x3bc36eb81b2cf72a],
    [0xbbc930ed923f29fe, 0xbba5f7dc8ec587a5],
    [0x3bc69a8d7c306946, 0xbb9588d09d75476d],
    [0xbbc937b54aaccd26, 0xbbc1de002096f057],
    [0xbbc678ab6c1518e1, 0x3bbf37798cb941dd],
    [0x3bb5a65c38510e4f, 0x3bb7603d7b8eac88],
    [0x3b91b51e2d5cd448, 0xbbc771b429f5f7df],
    [0xbbcbad003d32712e, 0x3bc7475d162aa50f],
    [0xbbcde3e47d1097c7, 0x3b8918c6c3002f58],
    [0x3bbdfbf08609e775, 0xbbbed92824d605b0],
    [0xbbbad6437fa1f85a, 0x3bc23e6385046864],
    [0x3b8c0c7104756a83, 0x3babd3b4b54a33dd],
    [0x3bc3a3a205096b85, 0xbbc04e41d5a92e15],
    [0x3bc69e87dd7e845b, 0xbbbaa376c15f218a],
    [0x3bacf9e0572c5a28, 0x3bc3d5f82e004d5a],
    [0xbbcebe1b26aace86, 0x3bc954fd7feff2b2],
    [0xbbbd2d615039e728, 0x3bc7b462eea68476],
    [0xbbc75efdeaf95be8, 0xbbc922dfa4ee5342],
    [0xbbb9561e9733dce4, 0xbbce1c607e6926e6],
    [0xbbbd331efd9b22ad, 0xbbc0268cabf573a8],
    [0x3bb6b9558896a52a, 0x3bb50c3d165671f9],
    [0xbbb5461c2e8f2090, 0xbbace9cda41e4b78],
    [0xbbc52ecd2f1b28e6, 0x3bc640be4aaced33],
    [0xbb7fb25cc88bb058, 0x3b8916d8f16c9f57],
    [0xbbabb39ec5635492, 0x3bce70b5d7e588e3],
    [0xbbc2dc57f8bbff1d, 0xbbcad4de04e8783e],
    [0xbbce544a50e6a4e1, 0xbbce8af0b61eae64],
    [0x3bc6f8d95f7b7d8a, 0x3bda18fbe0e630b2],
    [0x3bc11d0fb4c9e22e, 0xbbde37c41ec7ed37],
    [0x3bcb749a34e9fcf0, 0xbbd659c2d9aa802e],
    [0x3bd17524a7a53ab7, 0xbbcc92b551139c6e],
    [0xbbd98de80fdf9bba, 0xbbd4f95f0ac2b2f6],
    [0x3bb14767c8f68175, 0xbbd5c0372562a283],
    [0xbb98ed7b65e10f11, 0x3bd04ff2e73827b6],
    [0xbbd17236edc21eae, 0x3bd2779f28c0793a],
    [0xbbb97dd1bef378c6, 0x3bd7825e338ebbf0],
    [0x3bd0dbcc4a11b6c6, 0xbbcdba86645731ec],
    [0xbbdade80167933e0, 0xbbc7b49cbd6bf449],
    [0x3bd1d0f5eb01057f, 0x3bdd0cbb8485b000],
    [0x3bd4e21a78789a20, 0xbbda870dcfba2e4d],
    [0x3bbf3de7b834db2c, 0x3bdd5fdaf4b32b72],
    [0xbbcb662fede103aa, 0xbba0b639090694bb],
    [0x3bdeece2c9aadb96, 0x3bdab3d4fa8e3209],
    [0x3bd3ad6046d40f2f, 0x3bcfa518c90d3476],
    [0x3bdfce26d0293baf, 0xbbc1f0c499c1e032],
    [0xbbaaf9cfcff75aa2, 0x3bcda7861b70f94c],
    [0x3b5535f439324327, 0xbbbac01f0f30f4f7],
    [0xbbd551b11180dc24, 0x3bc17896ba3d64bf],
    [0xbba8515c37f7ab3d, 0xbbd716d33e7f4644],
    [0x3bdcb1a5742df5e4, 0xbbb833b00f39f422],
    [0xbbc349865bdf3ca2, 0xbbd8f3eb1b807d4b],
    [0x3bcd4841e5c03886, 0xbbcd9b4e24f0a52c],
    [0x3bced67e6a226b22, 0xbbcdf43e8c66e09b],
    [0x3bd4acd96bbdba46, 0x3bdb48461c9c7ac4],
    [0x3bd2c7037b093545, 0xbbccc6e9f195c445],
    [0xbbd08f35dedb4d2b, 0x3bd99bd323d1bc3e],
    [0x3bcaaebc950f0c18, 0x3bc1bf195319ec76],
    [0x3bd9e31711e53d97, 0x3bb5726ba29ad7d5],
    [0x3bc57539fa90e376, 0xbbdcfa3870763da7],
    [0x3bd8f9196766b37d, 0x3bde039261ec688b],
    [0x3bd460629ba481e0, 0xbbddfd1ff53bd35c],
    [0x3bae9bb7f553c2e3, 0x3bb9fa1b1cedc899],
    [0xbba8fc8acb8d6540, 0xbbde5e8d32043c5f],
    [0xbbc77545a7122e97, 0xbbd09a861ad3e176],
    [0xbbd30c339d7751e6, 0xbbdbd51e18688583],
    [0x3bbb8cb9ee7d9d56, 0x3bdaa4365284b453],
    [0x3bc5decc2000bc2d, 0x3bdbc6e6b7efe1a9],
    [0x3bd90d40e29f5f78, 0xbbc96bbb7e94ccc7],
    [0x3bd49c86b672e2b0, 0x3bc563c7744c3e22],
    [0xbb6748f95d9f2c24, 0xbbca5d2a9a099ec3],
    [0xbbb43b9f8ccd861e, 0x3bcd857672a61cf4],
    [0xbbd76509a03a26fa, 0x3bd073a00ec297f4],
    [0x3bd3b51b780082fa, 0x3bd8d554485f2281],
    [0xbbc6041337ff51b3, 0xbbc415b42c7ee528],
    [0xbbcfe3d9aef2a16b, 0x3bd1cb154f360a16],
    [0xbbde3a947c7755d7, 0x3bd0ea15b42c2a4a],
    [0xbbdef6fa277e03db, 0x3bba6ab313823563],
    [0xbbd35a4876989644, 0x3bc71262a515d37c],
    [0x3bbe6fdf5e75db62, 0x3bc3879e04c3bad0],
    [0x3bd99fa479959c66, 0x3b92970ed1e91f7e],
    [0x3bd64315749dd728, 0x3bd37f100aa6fad8],
    [0x3bc82129a2371500, 0xbba24528efb7fc1c],
    [0x3bdc8ba561043811, 0x3bd7acb675a06241],
    [0x3bda522cdea8728a, 0x3bcad77be86d5005],
    [0xbbcd7a4159ce463d, 0xbbda90efe923ca82],
    [0xbbc41080bc3154c1, 0xbbc64b13bcb4353c],
    [0x3bd8208fc919f5c7, 0x3bce303aa6f0ce77],
    [0x3bcd230feced62c3, 0xbbd2bdea323aebfb],
    [0x3bd22735252b2117, 0x3bbb1f1127396011],
    [0xbbd2933563c665b3, 0x3bb742097ecf7f05],
    [0xbbd51d997e2a717f, 0xbbc3f830a21eb906],
];

pub(crate) static S1: [u64; 4] = [
    0x3ff0000000000000, 0x3fc5555555555555, 0x3f811111111869d4,
    0x3f2a01061b363a81,
];

pub(crate) static S2: [[u64; 2]; 5] = [
    [0x3ff0000000000000, 0x0000000000000000],
    [0x3fc5555555555555, 0x3c655555554062b9],
    [0x3f81111111111111, 0x3c0126bf9abf8370],
    [0x3f2a01a01a01989f, 0x0000000000000000],
    [0x3ec71de4b3a00401, 0x0000000000000000],
];

pub(crate) static C1: [u64; 4] = [
    0x3ff0000000000000, 0x3fe0000000000000, 0x3fa5555555554e2e,
    0x3f56c16d52a52a35,
];

pub(crate) static C2: [[u64; 2]; 5] = [
    [0x3ff0000000000000, 0x0000000000000000],
    [0x3fe0000000000000, 0xba92772600000000],
    [0x3fa5555555555555, 0x3c4560cce697b2a2],
    [0x3f56c16c16c16330, 0x0000000000000000],
    [0x3efa01a1776b8d0b, 0x0000000000000000],
];

pub(crate) static EXC_W: [[u64; 3]; 4] = [
    [0x3f41bd15d1670050, 0x3f41bd15dff0122a, 0x3bf0000000000001],
    [0x3e892a2ee78ed49c, 0x3e892a2ee78ed4c6, 0xbb30000000000001],
    [0x3e6bcee70ebe7ec9, 0x3e6bcee70ebe7ecd, 0xbb0fffffffffffff],
    [0x3ece72460254649a, 0x3ece72460254ae19, 0x3b6fffffffffffff],
];

pub(crate) static EXC_V: [[u64; 3]; 7] = [
    [0x3f919e03c96f0997, 0x3f919e3cbe7ef607, 0xbc3fffffffffffff],
    [0x3fd4169f234f23b9, 0x3fd46b7b3b358f99, 0xbc7ffffffffffffe],
    [0x3f78c154465149e0, 0x3f78c15e26bbaa20, 0xbc1fffffffffffff],
    [0x3fe9147ff03dfb30, 0x3febba4dc4067a68, 0x3c90000000000000],
    [0x3fc9b88da8cd4e51, 0x3fc9e4f4a0396a4c, 0x3c6fffffffffffff],
    [0x3f9c6adb85d9e00f, 0x3f9c6bca941afa85, 0xbc3ffffffffffffe],
    [0x3fdd3e0d2f5d98d6, 0x3fde45428082fb8c, 0xbc7ffffffffffffe],
];

