// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Default head CDFs for the coefficient tokens, one set per quantizer context.
// These are placeholder values with the right shape and a plausible trend, not
// the codec's normative tables, so models built from them will not match
// other encoders bit for bit. Replace this file to get interoperable defaults.
// Indexed as [qctx][tx_size][plane_type][ref_type][band][band_context].
// Band 0 records have HEAD_TOKENS + 1 symbols (with a leading block-zero symbol)
// and only COEFF_CONTEXTS0 contexts; the remaining contexts are unused.
// There is no default for 64x64 transforms, see defaults.rs

use crate::cdf::aom_cdf;
use crate::consts::*;

pub type CoefCdfModel = [[[[[CoefCdf; COEFF_CONTEXTS]; COEF_BANDS]; REF_TYPES]; PLANE_TYPES]; TX_SIZES];

pub static default_qctx_coef_cdfs: [CoefCdfModel; TOKEN_CDF_Q_CTXS] = [
  // Q context 0
  [
    // TX_4X4
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 1966, 11207, 13225, 28025, 28480]), aom_cdf(&[  328,  6816,  8658, 25242, 25844]),
           aom_cdf(&[  328,  3572,  5067, 22257, 22930]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[12124, 14948, 27813, 28527]), aom_cdf(&[ 8847, 11488, 25353, 26302]),
           aom_cdf(&[ 5571,  7931, 22433, 23590]), aom_cdf(&[ 2294,  4305, 19055, 20371]),
           aom_cdf(&[ 1311,  2821, 16410, 17719]), aom_cdf(&[ 1311,  2343, 14208, 15396])],
          [aom_cdf(&[14418, 17677, 27997, 28913]), aom_cdf(&[11141, 14329, 25631, 26887]),
           aom_cdf(&[ 7864, 10853, 22807, 24400]), aom_cdf(&[ 4588,  7276, 19523, 21430]),
           aom_cdf(&[ 1311,  3626, 15781, 17955]), aom_cdf(&[ 1311,  3028, 13579, 15728])],
          [aom_cdf(&[16712, 20180, 28272, 29351]), aom_cdf(&[13435, 16954, 26001, 27517]),
           aom_cdf(&[10158, 13568, 23272, 25247]), aom_cdf(&[ 6881, 10050, 20084, 22519]),
           aom_cdf(&[ 3604,  6428, 16436, 19311]), aom_cdf(&[ 1311,  3639, 12950, 16121])],
          [aom_cdf(&[19005, 22474, 28639, 29828]), aom_cdf(&[15729, 19378, 26463, 28178]),
           aom_cdf(&[12452, 16092, 23829, 26117]), aom_cdf(&[ 9175, 12643, 20736, 23623]),
           aom_cdf(&[ 5898,  9058, 17184, 20674]), aom_cdf(&[ 2621,  5365, 13173, 17249])],
          [aom_cdf(&[21299, 24575, 29098, 30331]), aom_cdf(&[18022, 21620, 27017, 28857]),
           aom_cdf(&[14746, 18444, 24478, 26998]), aom_cdf(&[11469, 15073, 21479, 24731]),
           aom_cdf(&[ 8192, 11534, 18022, 22033]), aom_cdf(&[ 4915,  7856, 14107, 18884])],
        ],
        // Inter
        [
          [aom_cdf(&[  655,  9326, 11520, 27611, 28106]), aom_cdf(&[  328,  5843,  7754, 24960, 25584]),
           aom_cdf(&[  328,  2599,  4143, 21907, 22602]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[11141, 14100, 27578, 28325]), aom_cdf(&[ 7864, 10614, 25048, 26036]),
           aom_cdf(&[ 4588,  7034, 22059, 23259]), aom_cdf(&[ 1311,  3387, 18612, 19971]),
           aom_cdf(&[ 1311,  2821, 16410, 17719]), aom_cdf(&[ 1311,  2343, 14208, 15396])],
          [aom_cdf(&[13435, 16868, 27741, 28706]), aom_cdf(&[10158, 13491, 25307, 26620]),
           aom_cdf(&[ 6881,  9988, 22413, 24070]), aom_cdf(&[ 3604,  6387, 19061, 21035]),
           aom_cdf(&[ 1311,  3626, 15781, 17955]), aom_cdf(&[ 1311,  3028, 13579, 15728])],
          [aom_cdf(&[15729, 19409, 27997, 29142]), aom_cdf(&[12452, 16149, 25657, 27250]),
           aom_cdf(&[ 9175, 12733, 22859, 24920]), aom_cdf(&[ 5898,  9187, 19602, 22130]),
           aom_cdf(&[ 2621,  5540, 15886, 18857]), aom_cdf(&[ 1311,  3639, 12950, 16121])],
          [aom_cdf(&[18022, 21738, 28344, 29618]), aom_cdf(&[14746, 18606, 26100, 27913]),
           aom_cdf(&[11469, 15286, 23396, 25795]), aom_cdf(&[ 8192, 11805, 20234, 23242]),
           aom_cdf(&[ 4915,  8191, 16613, 20232]), aom_cdf(&[ 1638,  4471, 12534, 16742])],
          [aom_cdf(&[20316, 23872, 28783, 30122]), aom_cdf(&[17039, 20877, 26634, 28597]),
           aom_cdf(&[13763, 17662, 24025, 26683]), aom_cdf(&[10486, 14256, 20958, 24360]),
           aom_cdf(&[ 7209, 10685, 17433, 21604]), aom_cdf(&[ 3932,  6977, 13448, 18394])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[ 3604, 13812, 15632, 28977, 29341]), aom_cdf(&[  655,  8684, 10442, 26265, 26785]),
           aom_cdf(&[  328,  5194,  6650, 23393, 23993]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[13763, 16431, 28587, 29189]), aom_cdf(&[10486, 13017, 26306, 27133]),
           aom_cdf(&[ 7209,  9499, 23567, 24597]), aom_cdf(&[ 3932,  5905, 20369, 21559]),
           aom_cdf(&[ 1311,  2884, 17039, 18298]), aom_cdf(&[ 1311,  2393, 14837, 15985])],
          [aom_cdf(&[16056, 19105, 28757, 29527]), aom_cdf(&[12780, 15814, 26572, 27662]),
           aom_cdf(&[ 9503, 12388, 23927, 25342]), aom_cdf(&[ 6226,  8854, 20824, 22544]),
           aom_cdf(&[ 2949,  5239, 17262, 19247]), aom_cdf(&[ 1311,  3116, 14208, 16287])],
          [aom_cdf(&[18350, 21551, 29019, 29919]), aom_cdf(&[15073, 18393, 26929, 28237]),
           aom_cdf(&[11796, 15068, 24379, 26124]), aom_cdf(&[ 8520, 11604, 21371, 23559]),
           aom_cdf(&[ 5243,  8028, 17904, 20520]), aom_cdf(&[ 1966,  4369, 13979, 16985])],
          [aom_cdf(&[20644, 23786, 29373, 30351]), aom_cdf(&[17367, 20771, 27378, 28844]),
           aom_cdf(&[14090, 17557, 24923, 26932]), aom_cdf(&[10813, 14172, 22010, 24592]),
           aom_cdf(&[ 7537, 10645, 18638, 21803]), aom_cdf(&[ 4260,  7002, 14808, 18544])],
          [aom_cdf(&[22938, 25828, 29819, 30810]), aom_cdf(&[19661, 22964, 27918, 29470]),
           aom_cdf(&[16384, 19871, 25559, 27751]), aom_cdf(&[13107, 16575, 22741, 25629]),
           aom_cdf(&[ 9830, 13106, 19464, 23083]), aom_cdf(&[ 6554,  9490, 15729, 20091])],
        ],
        // Inter
        [
          [aom_cdf(&[ 2294, 12046, 14035, 28624, 29021]), aom_cdf(&[  328,  7465,  9312, 25936, 26483]),
           aom_cdf(&[  328,  4221,  5728, 23062, 23683]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[12780, 15586, 28371, 29004]), aom_cdf(&[ 9503, 12146, 26021, 26885]),
           aom_cdf(&[ 6226,  8604, 23213, 24283]), aom_cdf(&[ 2949,  4989, 19946, 21177]),
           aom_cdf(&[ 1311,  2884, 17039, 18298]), aom_cdf(&[ 1311,  2393, 14837, 15985])],
          [aom_cdf(&[15073, 18301, 28521, 29337]), aom_cdf(&[11796, 14980, 26267, 27411]),
           aom_cdf(&[ 8520, 11526, 23554, 25028]), aom_cdf(&[ 5243,  7968, 20382, 22165]),
           aom_cdf(&[ 1966,  4332, 16751, 18801]), aom_cdf(&[ 1311,  3116, 14208, 16287])],
          [aom_cdf(&[17367, 20786, 28764, 29725]), aom_cdf(&[14090, 17594, 26604, 27985]),
           aom_cdf(&[10813, 14238, 23986, 25813]), aom_cdf(&[ 7537, 10746, 20909, 23186]),
           aom_cdf(&[ 4260,  7145, 17374, 20083]), aom_cdf(&[ 1311,  3764, 13579, 16649])],
          [aom_cdf(&[19661, 23058, 29098, 30155]), aom_cdf(&[16384, 20005, 27034, 28593]),
           aom_cdf(&[13107, 16756, 24510, 26624]), aom_cdf(&[ 9830, 13340, 21529, 24226]),
           aom_cdf(&[ 6554,  9783, 18088, 21376]), aom_cdf(&[ 3277,  6114, 14189, 18053])],
          [aom_cdf(&[21955, 25134, 29524, 30614]), aom_cdf(&[18678, 22229, 27555, 29223]),
           aom_cdf(&[15401, 19097, 25127, 27450]), aom_cdf(&[12124, 15766, 22240, 25272]),
           aom_cdf(&[ 8847, 12263, 18894, 22668]), aom_cdf(&[ 5571,  8617, 15090, 19615])],
        ],
      ],
    ],
    // TX_8X8
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 2949, 12789, 15037, 27773, 28373]), aom_cdf(&[  328,  7789,  9997, 24775, 25606]),
           aom_cdf(&[  328,  4545,  6439, 21761, 22730]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[13107, 16121, 27460, 28351]), aom_cdf(&[ 9830, 12707, 24969, 26155]),
           aom_cdf(&[ 6554,  9183, 22020, 23482]), aom_cdf(&[ 3277,  5577, 18612, 20311]),
           aom_cdf(&[ 1311,  3151, 15466, 17266]), aom_cdf(&[ 1311,  2626, 13264, 14981])],
          [aom_cdf(&[15401, 18730, 27732, 28819]), aom_cdf(&[12124, 15427, 25336, 26823]),
           aom_cdf(&[ 8847, 11983, 22482, 24375]), aom_cdf(&[ 5571,  8426, 19169, 21454]),
           aom_cdf(&[ 2294,  4784, 15398, 18038]), aom_cdf(&[ 1311,  3236, 12635, 15373])],
          [aom_cdf(&[17695, 21127, 28095, 29329]), aom_cdf(&[14418, 17945, 25795, 27524]),
           aom_cdf(&[11141, 14591, 23036, 25294]), aom_cdf(&[ 7864, 11092, 19818, 22615]),
           aom_cdf(&[ 4588,  7476, 16142, 19467]), aom_cdf(&[ 1311,  3771, 12006, 15826])],
          [aom_cdf(&[19988, 23328, 28551, 29867]), aom_cdf(&[16712, 20276, 26345, 28247]),
           aom_cdf(&[13435, 17021, 23681, 26226]), aom_cdf(&[10158, 13590, 20559, 23782]),
           aom_cdf(&[ 6881, 10011, 16977, 20893]), aom_cdf(&[ 3604,  6311, 12937, 17538])],
          [aom_cdf(&[22282, 25349, 29098, 30419]), aom_cdf(&[19005, 22438, 26988, 28976]),
           aom_cdf(&[15729, 19292, 24419, 27157]), aom_cdf(&[12452, 15938, 21391, 24941]),
           aom_cdf(&[ 9175, 12405, 17904, 22304]), aom_cdf(&[ 5898,  8720, 13959, 19226])],
        ],
        // Inter
        [
          [aom_cdf(&[ 1638, 10977, 13429, 27320, 27974]), aom_cdf(&[  328,  6816,  9110, 24463, 25327]),
           aom_cdf(&[  328,  3572,  5531, 21381, 22383]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[12124, 15289, 27194, 28131]), aom_cdf(&[ 8847, 11847, 24635, 25871]),
           aom_cdf(&[ 5571,  8298, 21617, 23134]), aom_cdf(&[ 2294,  4671, 18140, 19896]),
           aom_cdf(&[ 1311,  3151, 15466, 17266]), aom_cdf(&[ 1311,  2626, 13264, 14981])],
          [aom_cdf(&[14418, 17936, 27446, 28596]), aom_cdf(&[11141, 14601, 24982, 26539]),
           aom_cdf(&[ 7864, 11129, 22059, 24030]), aom_cdf(&[ 4588,  7546, 18678, 21045]),
           aom_cdf(&[ 1311,  3881, 14837, 17563]), aom_cdf(&[ 1311,  3236, 12635, 15373])],
          [aom_cdf(&[16712, 20368, 27791, 29105]), aom_cdf(&[13435, 17151, 25421, 27243]),
           aom_cdf(&[10158, 13764, 22594, 24954]), aom_cdf(&[ 6881, 10236, 19307, 22215]),
           aom_cdf(&[ 3604,  6594, 15562, 19003]), aom_cdf(&[ 1311,  3771, 12006, 15826])],
          [aom_cdf(&[19005, 22602, 28226, 29643]), aom_cdf(&[15729, 19511, 25952, 27970]),
           aom_cdf(&[12452, 16220, 23219, 25893]), aom_cdf(&[ 9175, 12756, 20028, 23391]),
           aom_cdf(&[ 5898,  9147, 16377, 20442]), aom_cdf(&[ 2621,  5419, 12268, 17024])],
          [aom_cdf(&[21299, 24654, 28754, 30199]), aom_cdf(&[18022, 21700, 26575, 28705]),
           aom_cdf(&[14746, 18514, 23937, 26834]), aom_cdf(&[11469, 15124, 20840, 24562]),
           aom_cdf(&[ 8192, 11556, 17285, 21868]), aom_cdf(&[ 4915,  7840, 13271, 18730])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[ 4588, 15296, 17314, 28749, 29232]), aom_cdf(&[ 1638, 10355, 12394, 26044, 26743]),
           aom_cdf(&[  328,  6167,  8010, 22926, 23792]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[14746, 17584, 28262, 29019]), aom_cdf(&[11469, 14221, 25952, 26988]),
           aom_cdf(&[ 8192, 10741, 23183, 24487]), aom_cdf(&[ 4915,  7171, 19956, 21493]),
           aom_cdf(&[ 1638,  3540, 16269, 17985]), aom_cdf(&[ 1311,  2695, 13894, 15555])],
          [aom_cdf(&[17039, 20139, 28521, 29439]), aom_cdf(&[13763, 16898, 26306, 27599]),
           aom_cdf(&[10486, 13509, 23632, 25313]), aom_cdf(&[ 7209, 10000, 20500, 22561]),
           aom_cdf(&[ 3932,  6398, 16908, 19319]), aom_cdf(&[ 1311,  3343, 13264, 15917])],
          [aom_cdf(&[19333, 22481, 28872, 29900]), aom_cdf(&[16056, 19372, 26752, 28244]),
           aom_cdf(&[12780, 16084, 24173, 26167]), aom_cdf(&[ 9503, 12644, 21135, 23648]),
           aom_cdf(&[ 6226,  9079, 17639, 20665]), aom_cdf(&[ 2949,  5418, 13684, 17195])],
          [aom_cdf(&[21627, 24625, 29314, 30392]), aom_cdf(&[18350, 21658, 27289, 28911]),
           aom_cdf(&[15073, 18480, 24805, 27035]), aom_cdf(&[11796, 15118, 21863, 24742]),
           aom_cdf(&[ 8520, 11602, 18461, 22010]), aom_cdf(&[ 5243,  7957, 14601, 18816])],
          [aom_cdf(&[23921, 26588, 29848, 30899]), aom_cdf(&[20644, 23772, 27918, 29587]),
           aom_cdf(&[17367, 20714, 25530, 27904]), aom_cdf(&[14090, 17441, 22682, 25829]),
           aom_cdf(&[10813, 13981, 19376, 23340]), aom_cdf(&[ 7537, 10363, 15611, 20415])],
        ],
        // Inter
        [
          [aom_cdf(&[ 3277, 13599, 15813, 28359, 28888]), aom_cdf(&[  328,  8438, 10652, 25469, 26228]),
           aom_cdf(&[  328,  5194,  7105, 22566, 23463]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[13763, 16756, 28017, 28815]), aom_cdf(&[10486, 13365, 25638, 26721]),
           aom_cdf(&[ 7209,  9859, 22800, 24156]), aom_cdf(&[ 3932,  6268, 19504, 21095]),
           aom_cdf(&[ 1311,  3233, 16096, 17830]), aom_cdf(&[ 1311,  2695, 13894, 15555])],
          [aom_cdf(&[16056, 19350, 28256, 29230]), aom_cdf(&[12780, 16078, 25972, 27331]),
           aom_cdf(&[ 9503, 12660, 23229, 24984]), aom_cdf(&[ 6226,  9124, 20028, 22168]),
           aom_cdf(&[ 2949,  5499, 16368, 18860]), aom_cdf(&[ 1311,  3343, 13264, 15917])],
          [aom_cdf(&[18350, 21728, 28587, 29691]), aom_cdf(&[15073, 18584, 26398, 27978]),
           aom_cdf(&[11796, 15263, 23750, 25842]), aom_cdf(&[ 8520, 11793, 20644, 23263]),
           aom_cdf(&[ 5243,  8202, 17079, 20217]), aom_cdf(&[ 1966,  4516, 13055, 16682])],
          [aom_cdf(&[20644, 23906, 29010, 30182]), aom_cdf(&[17367, 20900, 26916, 28648]),
           aom_cdf(&[14090, 17686, 24363, 26716]), aom_cdf(&[10813, 14291, 21352, 24366]),
           aom_cdf(&[ 7537, 10744, 17881, 21573]), aom_cdf(&[ 4260,  7071, 13953, 18318])],
          [aom_cdf(&[22938, 25901, 29524, 30692]), aom_cdf(&[19661, 23042, 27525, 29329]),
           aom_cdf(&[16384, 19944, 25068, 27593]), aom_cdf(&[13107, 16634, 22151, 25464]),
           aom_cdf(&[ 9830, 13140, 18776, 22918]), aom_cdf(&[ 6554,  9490, 14942, 19933])],
        ],
      ],
    ],
    // TX_16X16
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 3932, 14313, 16705, 27601, 28345]), aom_cdf(&[  983,  9247, 11693, 24536, 25589]),
           aom_cdf(&[  328,  5518,  7731, 21323, 22605]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[14090, 17228, 27165, 28241]), aom_cdf(&[10813, 13856, 24645, 26074]),
           aom_cdf(&[ 7537, 10363, 21666, 23442]), aom_cdf(&[ 4260,  6774, 18229, 20322]),
           aom_cdf(&[ 1311,  3425, 14523, 16858]), aom_cdf(&[ 1311,  2852, 12321, 14611])],
          [aom_cdf(&[16384, 19726, 27525, 28783]), aom_cdf(&[13107, 16465, 25100, 26818]),
           aom_cdf(&[ 9830, 13051, 22217, 24411]), aom_cdf(&[ 6554,  9511, 18874, 21542]),
           aom_cdf(&[ 3277,  5872, 15073, 18188]), aom_cdf(&[ 1311,  3387, 11692, 15064])],
          [aom_cdf(&[18678, 22026, 27977, 29357]), aom_cdf(&[15401, 18885, 25648, 27584]),
           aom_cdf(&[12124, 15559, 22859, 25396]), aom_cdf(&[ 8847, 12077, 19612, 22769]),
           aom_cdf(&[ 5571,  8464, 15906, 19683]), aom_cdf(&[ 2294,  4750, 11741, 16114])],
          [aom_cdf(&[20972, 24142, 28521, 29948]), aom_cdf(&[17695, 21131, 26286, 28361]),
           aom_cdf(&[14418, 17904, 23593, 26382]), aom_cdf(&[11141, 14489, 20441, 23991]),
           aom_cdf(&[ 7864, 10913, 16830, 21165]), aom_cdf(&[ 4588,  7203, 12760, 17882])],
          [aom_cdf(&[23265, 26093, 29157, 30544]), aom_cdf(&[19988, 23222, 27017, 29134]),
           aom_cdf(&[16712, 20103, 24419, 27358]), aom_cdf(&[13435, 16764, 21361, 25194]),
           aom_cdf(&[10158, 13233, 17845, 22621]), aom_cdf(&[ 6881,  9537, 13871, 19615])],
        ],
        // Inter
        [
          [aom_cdf(&[ 2621, 12570, 15187, 27113, 27927]), aom_cdf(&[  328,  7789, 10387, 24025, 25144]),
           aom_cdf(&[  328,  4545,  6837, 20914, 22242]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[13107, 16410, 26870, 28002]), aom_cdf(&[ 9830, 13010, 24281, 25775]),
           aom_cdf(&[ 6554,  9490, 21234, 23079]), aom_cdf(&[ 3277,  5878, 17727, 19893]),
           aom_cdf(&[ 1311,  3425, 14523, 16858]), aom_cdf(&[ 1311,  2852, 12321, 14611])],
          [aom_cdf(&[15401, 18944, 27211, 28544]), aom_cdf(&[12124, 15650, 24717, 26520]),
           aom_cdf(&[ 8847, 12206, 21765, 24053]), aom_cdf(&[ 5571,  8638, 18353, 21121]),
           aom_cdf(&[ 2294,  4975, 14483, 17702]), aom_cdf(&[ 1311,  3387, 11692, 15064])],
          [aom_cdf(&[17695, 21276, 27643, 29119]), aom_cdf(&[14418, 18099, 25244, 27291]),
           aom_cdf(&[11141, 14740, 22387, 25045]), aom_cdf(&[ 7864, 11226, 19071, 22358]),
           aom_cdf(&[ 4588,  7586, 15296, 19210]), aom_cdf(&[ 1311,  3846, 11062, 15577])],
          [aom_cdf(&[19988, 23424, 28167, 29713]), aom_cdf(&[16712, 20373, 25864, 28073]),
           aom_cdf(&[13435, 17108, 23101, 26040]), aom_cdf(&[10158, 13658, 19880, 23592]),
           aom_cdf(&[ 6881, 10050, 16200, 20707]), aom_cdf(&[ 3604,  6311, 12062, 17363])],
          [aom_cdf(&[22282, 25403, 28783, 30313]), aom_cdf(&[19005, 22487, 26575, 28854]),
           aom_cdf(&[15729, 19327, 23908, 27026]), aom_cdf(&[12452, 15950, 20781, 24809]),
           aom_cdf(&[ 9175, 12384, 17197, 22179]), aom_cdf(&[ 5898,  8655, 13153, 19116])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[ 5571, 16722, 18859, 28596, 29197]), aom_cdf(&[ 2621, 11967, 14197, 25904, 26782]),
           aom_cdf(&[  328,  7140,  9293, 22517, 23665]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[15729, 18673, 27997, 28913]), aom_cdf(&[12452, 15357, 25657, 26909]),
           aom_cdf(&[ 9175, 11912, 22859, 24444]), aom_cdf(&[ 5898,  8365, 19602, 21498]),
           aom_cdf(&[ 2621,  4744, 15886, 18047]), aom_cdf(&[ 1311,  2940, 12950, 15170])],
          [aom_cdf(&[18022, 21119, 28344, 29406]), aom_cdf(&[14746, 17925, 26100, 27593]),
           aom_cdf(&[11469, 14570, 23396, 25346]), aom_cdf(&[ 8192, 11082, 20234, 22641]),
           aom_cdf(&[ 4915,  7489, 16613, 19457]), aom_cdf(&[ 1638,  3817, 12534, 15771])],
          [aom_cdf(&[20316, 23364, 28783, 29931]), aom_cdf(&[17039, 20301, 26634, 28302]),
           aom_cdf(&[13763, 17047, 24025, 26264]), aom_cdf(&[10486, 13628, 20958, 23793]),
           aom_cdf(&[ 7209, 10072, 17433, 20868]), aom_cdf(&[ 3932,  6406, 13448, 17467])],
          [aom_cdf(&[22610, 25426, 29314, 30475]), aom_cdf(&[19333, 22504, 27260, 29022]),
           aom_cdf(&[16056, 19359, 24746, 27185]), aom_cdf(&[12780, 16018, 21774, 24941]),
           aom_cdf(&[ 9503, 12509, 18344, 22267]), aom_cdf(&[ 6226,  8859, 14454, 19142])],
          [aom_cdf(&[24904, 27320, 29937, 31024]), aom_cdf(&[21627, 24548, 27977, 29740]),
           aom_cdf(&[18350, 21522, 25559, 28097]), aom_cdf(&[15073, 18269, 22682, 26071]),
           aom_cdf(&[11796, 14816, 19346, 23641]), aom_cdf(&[ 8520, 11192, 15552, 20785])],
        ],
        // Inter
        [
          [aom_cdf(&[ 4260, 15093, 17447, 28172, 28834]), aom_cdf(&[ 1311, 10119, 12547, 25294, 26250]),
           aom_cdf(&[  328,  6167,  8401, 22128, 23319]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[14746, 17860, 27722, 28691]), aom_cdf(&[11469, 14515, 25313, 26625]),
           aom_cdf(&[ 8192, 11043, 22446, 24098]), aom_cdf(&[ 4915,  7472, 19120, 21085]),
           aom_cdf(&[ 1638,  3830, 15335, 17567]), aom_cdf(&[ 1311,  2940, 12950, 15170])],
          [aom_cdf(&[17039, 20342, 28049, 29182]), aom_cdf(&[13763, 17115, 25736, 27311]),
           aom_cdf(&[10486, 13730, 22964, 25003]), aom_cdf(&[ 7209, 10215, 19733, 22236]),
           aom_cdf(&[ 3932,  6597, 16043, 18987]), aom_cdf(&[ 1311,  3513, 12321, 15592])],
          [aom_cdf(&[19333, 22622, 28469, 29707]), aom_cdf(&[16056, 19522, 26250, 28023]),
           aom_cdf(&[12780, 16234, 23573, 25927]), aom_cdf(&[ 9503, 12783, 20437, 23397]),
           aom_cdf(&[ 6226,  9199, 16843, 20410]), aom_cdf(&[ 2949,  5508, 12789, 16945])],
          [aom_cdf(&[21627, 24715, 28980, 30253]), aom_cdf(&[18350, 21753, 26857, 28748]),
           aom_cdf(&[15073, 18570, 24275, 26857]), aom_cdf(&[11796, 15194, 21234, 24556]),
           aom_cdf(&[ 8520, 11653, 17734, 21823]), aom_cdf(&[ 5243,  7973, 13776, 18638])],
          [aom_cdf(&[23921, 26639, 29583, 30806]), aom_cdf(&[20644, 23823, 27555, 29473]),
           aom_cdf(&[17367, 20755, 25068, 27778]), aom_cdf(&[14090, 17463, 22122, 25699]),
           aom_cdf(&[10813, 13975, 18717, 23213]), aom_cdf(&[ 7537, 10317, 14854, 20300])],
        ],
      ],
    ],
    // TX_32X32
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 4915, 15778, 18240, 27501, 28386]), aom_cdf(&[ 1966, 10899, 13475, 24458, 25721]),
           aom_cdf(&[  328,  6491,  8948, 20944, 22552]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[15073, 18274, 26929, 28190]), aom_cdf(&[11796, 14942, 24379, 26057]),
           aom_cdf(&[ 8520, 11476, 21371, 23468]), aom_cdf(&[ 5243,  7902, 17904, 20402]),
           aom_cdf(&[ 1966,  4249, 13979, 16835]), aom_cdf(&[ 1311,  3022, 11377, 14286])],
          [aom_cdf(&[17367, 20671, 27378, 28801]), aom_cdf(&[14090, 17449, 24923, 26869]),
           aom_cdf(&[10813, 14061, 22010, 24506]), aom_cdf(&[ 7537, 10534, 18638, 21690]),
           aom_cdf(&[ 4260,  6897, 14808, 18400]), aom_cdf(&[ 1311,  3481, 10748, 14800])],
          [aom_cdf(&[19661, 22881, 27918, 29431]), aom_cdf(&[16384, 19779, 25559, 27693]),
           aom_cdf(&[13107, 16479, 22741, 25549]), aom_cdf(&[ 9830, 13010, 19464, 22976]),
           aom_cdf(&[ 6554,  9398, 15729, 19954]), aom_cdf(&[ 3277,  5671, 11534, 16461])],
          [aom_cdf(&[21955, 24923, 28551, 30069]), aom_cdf(&[18678, 21950, 26286, 28516]),
           aom_cdf(&[15401, 18748, 23563, 26583]), aom_cdf(&[12124, 15345, 20382, 24246]),
           aom_cdf(&[ 8847, 11768, 16741, 21485]), aom_cdf(&[ 5571,  8046, 12642, 18277])],
          [aom_cdf(&[24248, 26812, 29275, 30700]), aom_cdf(&[20972, 23977, 27106, 29325]),
           aom_cdf(&[17695, 20883, 24478, 27595]), aom_cdf(&[14418, 17556, 21391, 25487]),
           aom_cdf(&[11141, 14024, 17845, 22979]), aom_cdf(&[ 7864, 10417, 14090, 20217])],
        ],
        // Inter
        [
          [aom_cdf(&[ 3604, 14103, 16808, 26982, 27954]), aom_cdf(&[  655,  9005, 11804, 23738, 25110]),
           aom_cdf(&[  328,  5518,  8066, 20506, 22173]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[14090, 17469, 26604, 27936]), aom_cdf(&[10813, 14107, 23986, 25743]),
           aom_cdf(&[ 7537, 10612, 20909, 23091]), aom_cdf(&[ 4260,  7014, 17374, 19960]),
           aom_cdf(&[ 1311,  3642, 13579, 16496]), aom_cdf(&[ 1311,  3022, 11377, 14286])],
          [aom_cdf(&[16384, 19898, 27034, 28547]), aom_cdf(&[13107, 16642, 24510, 26558]),
           aom_cdf(&[ 9830, 13223, 21529, 24136]), aom_cdf(&[ 6554,  9668, 18088, 21259]),
           aom_cdf(&[ 3277,  6005, 14189, 17904]), aom_cdf(&[ 1311,  3481, 10748, 14800])],
          [aom_cdf(&[18678, 22140, 27555, 29181]), aom_cdf(&[15401, 18999, 25127, 27388]),
           aom_cdf(&[12124, 15665, 22240, 25188]), aom_cdf(&[ 8847, 12163, 18894, 22557]),
           aom_cdf(&[ 5571,  8521, 15090, 19474]), aom_cdf(&[ 2294,  4768, 10827, 15917])],
          [aom_cdf(&[20972, 24210, 28167, 29824]), aom_cdf(&[17695, 21195, 25834, 28219]),
           aom_cdf(&[14418, 17954, 23042, 26232]), aom_cdf(&[11141, 14515, 19792, 23840]),
           aom_cdf(&[ 7864, 10905, 16083, 21021]), aom_cdf(&[ 4588,  7152, 11914, 17753])],
          [aom_cdf(&[23265, 26125, 28872, 30461]), aom_cdf(&[19988, 23245, 26634, 29038]),
           aom_cdf(&[16712, 20108, 23937, 27257]), aom_cdf(&[13435, 16741, 20781, 25097]),
           aom_cdf(&[10158, 13172, 17167, 22534]), aom_cdf(&[ 6881,  9535, 13353, 19721])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[ 6554, 18088, 20277, 28511, 29226]), aom_cdf(&[ 3604, 13520, 15861, 25839, 26892]),
           aom_cdf(&[  655,  8362, 10727, 22274, 23701]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[16712, 19703, 27791, 28866]), aom_cdf(&[13435, 16432, 25421, 26891]),
           aom_cdf(&[10158, 13018, 22594, 24466]), aom_cdf(&[ 6881,  9491, 19307, 21568]),
           aom_cdf(&[ 3604,  5876, 15562, 18177]), aom_cdf(&[ 1311,  3129, 12006, 14830])],
          [aom_cdf(&[19005, 22048, 28226, 29425]), aom_cdf(&[15729, 18898, 25952, 27643]),
           aom_cdf(&[12452, 15574, 23219, 25435]), aom_cdf(&[ 9175, 12105, 20028, 22780]),
           aom_cdf(&[ 5898,  8518, 16377, 19656]), aom_cdf(&[ 2621,  4840, 12268, 16040])],
          [aom_cdf(&[21299, 24207, 28754, 30006]), aom_cdf(&[18022, 21187, 26575, 28408]),
           aom_cdf(&[14746, 17963, 23937, 26410]), aom_cdf(&[11469, 14561, 20840, 23989]),
           aom_cdf(&[ 8192, 11011, 17285, 21125]), aom_cdf(&[ 4915,  7338, 13271, 17794])],
          [aom_cdf(&[23593, 26194, 29373, 30595]), aom_cdf(&[20316, 23315, 27289, 29174]),
           aom_cdf(&[17039, 20199, 24746, 27377]), aom_cdf(&[13763, 16876, 21745, 25184]),
           aom_cdf(&[10486, 13371, 18285, 22572]), aom_cdf(&[ 7209,  9714, 14365, 19518])],
          [aom_cdf(&[25887, 28027, 30084, 31179]), aom_cdf(&[22610, 25298, 28095, 29927]),
           aom_cdf(&[19333, 22301, 25648, 28325]), aom_cdf(&[16056, 19064, 22741, 26351]),
           aom_cdf(&[12780, 15616, 19376, 23983]), aom_cdf(&[ 9503, 11983, 15552, 21199])],
        ],
        // Inter
        [
          [aom_cdf(&[ 5243, 16528, 18950, 28058, 28850]), aom_cdf(&[ 2294, 11741, 14298, 25198, 26349]),
           aom_cdf(&[  328,  7140,  9623, 21748, 23247]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[15729, 18903, 27486, 28627]), aom_cdf(&[12452, 15601, 25048, 26592]),
           aom_cdf(&[ 9175, 12160, 22151, 24105]), aom_cdf(&[ 5898,  8607, 18796, 21143]),
           aom_cdf(&[ 2621,  4970, 14982, 17685]), aom_cdf(&[ 1311,  3129, 12006, 14830])],
          [aom_cdf(&[18022, 21283, 27902, 29187]), aom_cdf(&[14746, 18098, 25559, 27347]),
           aom_cdf(&[11469, 14742, 22757, 25080]), aom_cdf(&[ 8192, 11244, 19497, 22364]),
           aom_cdf(&[ 4915,  7631, 15778, 19176]), aom_cdf(&[ 1638,  3930, 11600, 15495])],
          [aom_cdf(&[20316, 23473, 28410, 29770]), aom_cdf(&[17039, 20415, 26162, 28117]),
           aom_cdf(&[13763, 17155, 23455, 26063]), aom_cdf(&[10486, 13721, 20290, 23584]),
           aom_cdf(&[ 7209, 10141, 16666, 20659]), aom_cdf(&[ 3932,  6441, 12583, 17266])],
          [aom_cdf(&[22610, 25490, 29010, 30363]), aom_cdf(&[19333, 22568, 26857, 28890]),
           aom_cdf(&[16056, 19414, 24245, 27041]), aom_cdf(&[12780, 16054, 21175, 24792]),
           aom_cdf(&[ 9503, 12516, 17646, 22122]), aom_cdf(&[ 6226,  8827, 13658, 19009])],
          [aom_cdf(&[24904, 27350, 29701, 30952]), aom_cdf(&[21627, 24575, 27643, 29652]),
           aom_cdf(&[18350, 21535, 25127, 28000]), aom_cdf(&[15073, 18258, 22151, 25973]),
           aom_cdf(&[11796, 14772, 18717, 23551]), aom_cdf(&[ 8520, 11105, 14824, 20710])],
        ],
      ],
    ],
  ],
  // Q context 1
  [
    // TX_4X4
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 7537, 17881, 19590, 30088, 30389]), aom_cdf(&[ 4588, 13323, 15073, 27907, 28374]),
           aom_cdf(&[ 1638,  8176,  9848, 24898, 25528]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[15729, 18455, 29360, 29905]), aom_cdf(&[12452, 15121, 27283, 28073]),
           aom_cdf(&[ 9175, 11666, 24746, 25773]), aom_cdf(&[ 5898,  8118, 21751, 22985]),
           aom_cdf(&[ 2621,  4503, 18298, 19687]), aom_cdf(&[ 1311,  2726, 15466, 16851])],
          [aom_cdf(&[18022, 21013, 29524, 30199]), aom_cdf(&[14746, 17817, 27542, 28545]),
           aom_cdf(&[11469, 14468, 25100, 26450]), aom_cdf(&[ 8192, 10994, 22200, 23891]),
           aom_cdf(&[ 4915,  7422, 18842, 20847]), aom_cdf(&[ 1638,  3780, 15024, 17295])],
          [aom_cdf(&[20316, 23344, 29780, 30545]), aom_cdf(&[17039, 20295, 27892, 29062]),
           aom_cdf(&[13763, 17062, 25546, 27164]), aom_cdf(&[10486, 13672, 22741, 24827]),
           aom_cdf(&[ 7209, 10153, 19477, 22029]), aom_cdf(&[ 3932,  6533, 15755, 18749])],
          [aom_cdf(&[22610, 25466, 30127, 30930]), aom_cdf(&[19333, 22574, 28334, 29611]),
           aom_cdf(&[16056, 19466, 26083, 27902]), aom_cdf(&[12780, 16170, 23373, 25778]),
           aom_cdf(&[ 9503, 12713, 20205, 23220]), aom_cdf(&[ 6226,  9124, 16577, 20204])],
          [aom_cdf(&[24904, 27395, 30566, 31341]), aom_cdf(&[21627, 24668, 28869, 30179]),
           aom_cdf(&[18350, 21695, 26712, 28650]), aom_cdf(&[15073, 18503, 24098, 26733]),
           aom_cdf(&[11796, 15118, 21024, 24406]), aom_cdf(&[ 8520, 11570, 17492, 21647])],
        ],
        // Inter
        [
          [aom_cdf(&[ 6226, 16312, 18201, 29806, 30138]), aom_cdf(&[ 3277, 11534, 13445, 27460, 27969]),
           aom_cdf(&[  328,  6167,  7976, 24256, 24937]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[14746, 17629, 29164, 29740]), aom_cdf(&[11469, 14268, 27017, 27845]),
           aom_cdf(&[ 8192, 10787, 24412, 25482]), aom_cdf(&[ 4915,  7216, 21348, 22627]),
           aom_cdf(&[ 1638,  3581, 17826, 19260]), aom_cdf(&[ 1311,  2726, 15466, 16851])],
          [aom_cdf(&[17039, 20229, 29308, 30027]), aom_cdf(&[13763, 17001, 27256, 28315]),
           aom_cdf(&[10486, 13623, 24746, 26158]), aom_cdf(&[ 7209, 10123, 21778, 23536]),
           aom_cdf(&[ 3932,  6527, 18350, 20426]), aom_cdf(&[ 1311,  3475, 14837, 17132])],
          [aom_cdf(&[19333, 22600, 29544, 30369]), aom_cdf(&[16056, 19516, 27587, 28831]),
           aom_cdf(&[12780, 16250, 25172, 26874]), aom_cdf(&[ 9503, 12830, 22299, 24476]),
           aom_cdf(&[ 6226,  9284, 18966, 21616]), aom_cdf(&[ 2949,  5639, 15175, 18271])],
          [aom_cdf(&[21627, 24760, 29871, 30752]), aom_cdf(&[18350, 21828, 28010, 29380]),
           aom_cdf(&[15073, 18683, 25690, 27615]), aom_cdf(&[11796, 15353, 22911, 25435]),
           aom_cdf(&[ 8520, 11866, 19674, 22816]), aom_cdf(&[ 5243,  8249, 15978, 19739])],
          [aom_cdf(&[23921, 26723, 30291, 31163]), aom_cdf(&[20644, 23954, 28525, 29950]),
           aom_cdf(&[17367, 20940, 26300, 28369]), aom_cdf(&[14090, 17710, 23616, 26398]),
           aom_cdf(&[10813, 14291, 20473, 24014]), aom_cdf(&[ 7537, 10711, 16872, 21196])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[ 9175, 20028, 21526, 30730, 30958]), aom_cdf(&[ 6226, 15781, 17351, 28861, 29236]),
           aom_cdf(&[ 3277, 10945, 12472, 26221, 26745]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[17367, 19893, 29996, 30439]), aom_cdf(&[14090, 16612, 28099, 28771]),
           aom_cdf(&[10813, 13202, 25743, 26642]), aom_cdf(&[ 7537,  9691, 22928, 24030]),
           aom_cdf(&[ 4260,  6107, 19654, 20913]), aom_cdf(&[ 1311,  2789, 16096, 17429])],
          [aom_cdf(&[19661, 22387, 30147, 30692]), aom_cdf(&[16384, 19254, 28344, 29194]),
           aom_cdf(&[13107, 15962, 26083, 27260]), aom_cdf(&[ 9830, 12537, 23364, 24868]),
           aom_cdf(&[ 6554,  9007, 20185, 21997]), aom_cdf(&[ 3277,  5400, 16548, 18624])],
          [aom_cdf(&[21955, 24654, 30389, 30998]), aom_cdf(&[18678, 21679, 28682, 29663]),
           aom_cdf(&[15401, 18513, 26516, 27916]), aom_cdf(&[12124, 15184, 23891, 25738]),
           aom_cdf(&[ 8847, 11718, 20808, 23104]), aom_cdf(&[ 5571,  8143, 17265, 19994])],
          [aom_cdf(&[24248, 26709, 30723, 31345]), aom_cdf(&[20972, 23902, 29111, 30164]),
           aom_cdf(&[17695, 20872, 27040, 28598]), aom_cdf(&[14418, 17648, 24510, 26624]),
           aom_cdf(&[11141, 14255, 21522, 24221]), aom_cdf(&[ 7864, 10723, 18075, 21366])],
          [aom_cdf(&[26542, 28569, 31149, 31719]), aom_cdf(&[23265, 25939, 29632, 30686]),
           aom_cdf(&[19988, 23056, 27656, 29292]), aom_cdf(&[16712, 19945, 25222, 27516]),
           aom_cdf(&[13435, 16636, 22328, 25335]), aom_cdf(&[10158, 13156, 18976, 22727])],
        ],
        // Inter
        [
          [aom_cdf(&[ 7864, 18573, 20242, 30497, 30751]), aom_cdf(&[ 4915, 14107, 15831, 28476, 28888]),
           aom_cdf(&[ 1966,  9051, 10711, 25653, 26222]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[16384, 19071, 29819, 30291]), aom_cdf(&[13107, 15761, 27853, 28561]),
           aom_cdf(&[ 9830, 12326, 25428, 26367]), aom_cdf(&[ 6554,  8792, 22544, 23689]),
           aom_cdf(&[ 3277,  5188, 19202, 20504]), aom_cdf(&[ 1311,  2789, 16096, 17429])],
          [aom_cdf(&[18678, 21609, 29950, 30536]), aom_cdf(&[15401, 18444, 28079, 28979]),
           aom_cdf(&[12124, 15122, 25749, 26984]), aom_cdf(&[ 8847, 11670, 22961, 24530]),
           aom_cdf(&[ 5571,  8116, 19713, 21593]), aom_cdf(&[ 2294,  4488, 16007, 18153])],
          [aom_cdf(&[20972, 23916, 30173, 30837]), aom_cdf(&[17695, 20905, 28397, 29446]),
           aom_cdf(&[14418, 17706, 26162, 27642]), aom_cdf(&[11141, 14346, 23468, 25403]),
           aom_cdf(&[ 7864, 10853, 20316, 22707]), aom_cdf(&[ 4588,  7253, 16705, 19532])],
          [aom_cdf(&[23265, 26010, 30487, 31181]), aom_cdf(&[19988, 23163, 28806, 29947]),
           aom_cdf(&[16712, 20096, 26667, 28326]), aom_cdf(&[13435, 16838, 24068, 26295]),
           aom_cdf(&[10158, 13414, 21011, 23833]), aom_cdf(&[ 6881,  9853, 17495, 20916])],
          [aom_cdf(&[25559, 27906, 30894, 31553]), aom_cdf(&[22282, 25233, 29308, 30470]),
           aom_cdf(&[19005, 22308, 27263, 29025]), aom_cdf(&[15729, 19160, 24760, 27194]),
           aom_cdf(&[12452, 15816, 21797, 24957]), aom_cdf(&[ 9175, 12303, 18376, 22291])],
        ],
      ],
    ],
    // TX_8X8
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 8520, 19189, 21013, 29916, 30304]), aom_cdf(&[ 5571, 14818, 16756, 27742, 28345]),
           aom_cdf(&[ 2621,  9857, 11793, 24749, 25583]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[16712, 19555, 29075, 29755]), aom_cdf(&[13435, 16277, 26968, 27942]),
           aom_cdf(&[10158, 12864, 24402, 25674]), aom_cdf(&[ 6881,  9346, 21378, 22927]),
           aom_cdf(&[ 3604,  5748, 17895, 19679]), aom_cdf(&[ 1311,  3028, 14523, 16420])],
          [aom_cdf(&[19005, 21999, 29327, 30126]), aom_cdf(&[15729, 18857, 27315, 28493]),
           aom_cdf(&[12452, 15550, 24845, 26429]), aom_cdf(&[ 9175, 12105, 21915, 23912]),
           aom_cdf(&[ 5898,  8550, 18527, 20920]), aom_cdf(&[ 2621,  4913, 14680, 17429])],
          [aom_cdf(&[21299, 24229, 29671, 30538]), aom_cdf(&[18022, 21234, 27754, 29078]),
           aom_cdf(&[14746, 18042, 25379, 27211]), aom_cdf(&[11469, 14681, 22544, 24916]),
           aom_cdf(&[ 8192, 11178, 19251, 22171]), aom_cdf(&[ 4915,  7561, 15499, 18953])],
          [aom_cdf(&[23593, 26264, 30107, 30980]), aom_cdf(&[20316, 23424, 28285, 29684]),
           aom_cdf(&[17039, 20357, 26005, 28007]), aom_cdf(&[13763, 17089, 23265, 25926]),
           aom_cdf(&[10486, 13648, 20067, 23420]), aom_cdf(&[ 7209, 10061, 16410, 20467])],
          [aom_cdf(&[25887, 28118, 30635, 31437]), aom_cdf(&[22610, 25444, 28908, 30298]),
           aom_cdf(&[19333, 22510, 26722, 28802]), aom_cdf(&[16056, 19345, 24078, 26928]),
           aom_cdf(&[12780, 15976, 20975, 24654]), aom_cdf(&[ 9503, 12429, 17413, 21958])],
        ],
        // Inter
        [
          [aom_cdf(&[ 7209, 17688, 19713, 29601, 30032]), aom_cdf(&[ 4260, 13097, 15222, 27260, 27921]),
           aom_cdf(&[ 1311,  7917, 10017, 24070, 24975]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[15729, 18746, 28849, 29570]), aom_cdf(&[12452, 15438, 26673, 27697]),
           aom_cdf(&[ 9175, 11999, 24039, 25365]), aom_cdf(&[ 5898,  8456, 20945, 22553]),
           aom_cdf(&[ 2621,  4837, 17393, 19238]), aom_cdf(&[ 1311,  3028, 14523, 16420])],
          [aom_cdf(&[18022, 21230, 29082, 29937]), aom_cdf(&[14746, 18055, 27001, 28247]),
           aom_cdf(&[11469, 14717, 24461, 26123]), aom_cdf(&[ 8192, 11244, 21463, 23543]),
           aom_cdf(&[ 4915,  7664, 18006, 20486]), aom_cdf(&[ 1638,  4004, 14090, 16929])],
          [aom_cdf(&[20316, 23498, 29406, 30347]), aom_cdf(&[17039, 20465, 27420, 28832]),
           aom_cdf(&[13763, 17239, 24976, 26908]), aom_cdf(&[10486, 13846, 22073, 24554]),
           aom_cdf(&[ 7209, 10314, 18711, 21747]), aom_cdf(&[ 3932,  6672, 14890, 18465])],
          [aom_cdf(&[22610, 25567, 29822, 30788]), aom_cdf(&[19333, 22686, 27931, 29440]),
           aom_cdf(&[16056, 19581, 25582, 27709]), aom_cdf(&[12780, 16278, 22774, 25572]),
           aom_cdf(&[ 9503, 12804, 19507, 23008]), aom_cdf(&[ 6226,  9188, 15781, 19994])],
          [aom_cdf(&[24904, 27454, 30330, 31247]), aom_cdf(&[21627, 24735, 28534, 30058]),
           aom_cdf(&[18350, 21760, 26280, 28512]), aom_cdf(&[15073, 18556, 23567, 26585]),
           aom_cdf(&[11796, 15150, 20395, 24255]), aom_cdf(&[ 8520, 11570, 16764, 21501])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[10158, 21237, 22825, 30577, 30875]), aom_cdf(&[ 7209, 17177, 18908, 28714, 29201]),
           aom_cdf(&[ 4260, 12527, 14290, 26089, 26783]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[18350, 20970, 29740, 30297]), aom_cdf(&[15073, 17749, 27813, 28646]),
           aom_cdf(&[11796, 14386, 25428, 26544]), aom_cdf(&[ 8520, 10911, 22584, 23969]),
           aom_cdf(&[ 5243,  7349, 19281, 20899]), aom_cdf(&[ 1966,  3728, 15519, 17313])],
          [aom_cdf(&[20644, 23351, 29979, 30626]), aom_cdf(&[17367, 20278, 28148, 29146]),
           aom_cdf(&[14090, 17032, 25857, 27239]), aom_cdf(&[10813, 13641, 23108, 24885]),
           aom_cdf(&[ 7537, 10133, 19900, 22062]), aom_cdf(&[ 4260,  6535, 16233, 18747])],
          [aom_cdf(&[22938, 25518, 30310, 30999]), aom_cdf(&[19661, 22602, 28574, 29681]),
           aom_cdf(&[16384, 19482, 26378, 27963]), aom_cdf(&[13107, 16186, 23724, 25822]),
           aom_cdf(&[ 9830, 12741, 20611, 23237]), aom_cdf(&[ 6554,  9175, 17039, 20185])],
          [aom_cdf(&[25231, 27487, 30733, 31401]), aom_cdf(&[21955, 24738, 29091, 30239]),
           aom_cdf(&[18678, 21754, 26991, 28701]), aom_cdf(&[15401, 18562, 24432, 26766]),
           aom_cdf(&[12124, 15190, 21414, 24411]), aom_cdf(&[ 8847, 11665, 17937, 21615])],
          [aom_cdf(&[27525, 29275, 31248, 31819]), aom_cdf(&[24248, 26702, 29701, 30805]),
           aom_cdf(&[20972, 23863, 27696, 29440]), aom_cdf(&[17695, 20785, 25231, 27703]),
           aom_cdf(&[14418, 17495, 22308, 25572]), aom_cdf(&[11141, 14022, 18927, 23024])],
        ],
        // Inter
        [
          [aom_cdf(&[ 8847, 19851, 21630, 30314, 30648]), aom_cdf(&[ 5898, 15571, 17480, 28297, 28833]),
           aom_cdf(&[ 2949, 10702, 12624, 25486, 26244]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[17367, 20165, 29534, 30129]), aom_cdf(&[14090, 16914, 27538, 28417]),
           aom_cdf(&[10813, 13525, 25084, 26252]), aom_cdf(&[ 7537, 10024, 22171, 23612]),
           aom_cdf(&[ 4260,  6441, 18799, 20475]), aom_cdf(&[ 1311,  3110, 15152, 16984])],
          [aom_cdf(&[19661, 22588, 29753, 30453]), aom_cdf(&[16384, 19481, 27853, 28914]),
           aom_cdf(&[13107, 16204, 25494, 26948]), aom_cdf(&[ 9830, 12785, 22675, 24532]),
           aom_cdf(&[ 6554,  9251, 19399, 21645]), aom_cdf(&[ 3277,  5630, 15663, 18263])],
          [aom_cdf(&[21955, 24793, 30065, 30822]), aom_cdf(&[18678, 21840, 28259, 29449]),
           aom_cdf(&[15401, 18685, 25995, 27675]), aom_cdf(&[12124, 15357, 23272, 25475]),
           aom_cdf(&[ 8847, 11883, 20090, 22828]), aom_cdf(&[ 5571,  8290, 16450, 19713])],
          [aom_cdf(&[24248, 26798, 30468, 31222]), aom_cdf(&[20972, 24008, 28757, 30009]),
           aom_cdf(&[17695, 20985, 26588, 28417]), aom_cdf(&[14418, 17758, 23960, 26426]),
           aom_cdf(&[11141, 14353, 20873, 24013]), aom_cdf(&[ 7864, 10798, 17328, 21157])],
          [aom_cdf(&[26542, 28620, 30962, 31641]), aom_cdf(&[23265, 26002, 29347, 30579]),
           aom_cdf(&[19988, 23121, 27273, 29163]), aom_cdf(&[16712, 20003, 24740, 27373]),
           aom_cdf(&[13435, 16677, 21748, 25186]), aom_cdf(&[10158, 13170, 18298, 22581])],
        ],
      ],
    ],
    // TX_16X16
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[ 9503, 20437, 22312, 29809, 30282]), aom_cdf(&[ 6554, 16253, 18304, 27648, 28386]),
           aom_cdf(&[ 3604, 11479, 13591, 24678, 25714]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[17695, 20595, 28849, 29664]), aom_cdf(&[14418, 17369, 26712, 27875]),
           aom_cdf(&[11141, 13996, 24117, 25640]), aom_cdf(&[ 7864, 10504, 21063, 22936]),
           aom_cdf(&[ 4588,  6921, 17551, 19742]), aom_cdf(&[ 1311,  3274, 13579, 16035])],
          [aom_cdf(&[19988, 22933, 29190, 30106]), aom_cdf(&[16712, 19843, 27148, 28497]),
           aom_cdf(&[13435, 16575, 24648, 26467]), aom_cdf(&[10158, 13156, 21689, 23994]),
           aom_cdf(&[ 6881,  9615, 18271, 21055]), aom_cdf(&[ 3604,  5978, 14395, 17629])],
          [aom_cdf(&[22282, 25071, 29622, 30579]), aom_cdf(&[19005, 22127, 27676, 29142]),
           aom_cdf(&[15729, 18973, 25271, 27310]), aom_cdf(&[12452, 15637, 22407, 25059]),
           aom_cdf(&[ 9175, 12148, 19084, 22368]), aom_cdf(&[ 5898,  8531, 15303, 19215])],
          [aom_cdf(&[24576, 27027, 30147, 31069]), aom_cdf(&[21299, 24238, 28295, 29798]),
           aom_cdf(&[18022, 21207, 25985, 28156]), aom_cdf(&[14746, 17964, 23216, 26120]),
           aom_cdf(&[11469, 14536, 19988, 23669]), aom_cdf(&[ 8192, 10949, 16302, 20781])],
          [aom_cdf(&[26870, 28816, 30763, 31565]), aom_cdf(&[23593, 26191, 29006, 30451]),
           aom_cdf(&[20316, 23295, 26791, 28991]), aom_cdf(&[17039, 20154, 24117, 27162]),
           aom_cdf(&[13763, 16796, 20985, 24944]), aom_cdf(&[10486, 13249, 17393, 22313])],
        ],
        // Inter
        [
          [aom_cdf(&[ 8192, 19005, 21097, 29465, 29993]), aom_cdf(&[ 5243, 14601, 16858, 27136, 27947]),
           aom_cdf(&[ 2294,  9608, 11905, 23967, 25094]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[16712, 19801, 28593, 29462]), aom_cdf(&[13435, 16544, 26388, 27613]),
           aom_cdf(&[10158, 13143, 23724, 25316]), aom_cdf(&[ 6881,  9625, 20601, 22548]),
           aom_cdf(&[ 3604,  6019, 17020, 19287]), aom_cdf(&[ 1311,  3274, 13579, 16035])],
          [aom_cdf(&[19005, 22176, 28914, 29901]), aom_cdf(&[15729, 19051, 26804, 28236]),
           aom_cdf(&[12452, 15751, 24235, 26147]), aom_cdf(&[ 9175, 12303, 21207, 23612]),
           aom_cdf(&[ 5898,  8736, 17721, 20610]), aom_cdf(&[ 2621,  5075, 13776, 17118])],
          [aom_cdf(&[21299, 24350, 29327, 30373]), aom_cdf(&[18022, 21367, 27312, 28883]),
           aom_cdf(&[14746, 18177, 24838, 26995]), aom_cdf(&[11469, 14809, 21905, 24686]),
           aom_cdf(&[ 8192, 11289, 18514, 21935]), aom_cdf(&[ 4915,  7645, 14664, 18719])],
          [aom_cdf(&[23593, 26338, 29832, 30865]), aom_cdf(&[20316, 23506, 27912, 29543]),
           aom_cdf(&[17039, 20437, 25533, 27848]), aom_cdf(&[13763, 17157, 22695, 25757]),
           aom_cdf(&[10486, 13694, 19399, 23249]), aom_cdf(&[ 7209, 10077, 15643, 20301])],
          [aom_cdf(&[25887, 28158, 30428, 31364]), aom_cdf(&[22610, 25487, 28603, 30202]),
           aom_cdf(&[19333, 22547, 26319, 28692]), aom_cdf(&[16056, 19365, 23577, 26812]),
           aom_cdf(&[12780, 15970, 20375, 24539]), aom_cdf(&[ 9503, 12388, 16715, 21852])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[11141, 22387, 24007, 30484, 30850]), aom_cdf(&[ 8192, 18514, 20336, 28634, 29230]),
           aom_cdf(&[ 5243, 14051, 15968, 26030, 26892]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[19333, 21988, 29544, 30214]), aom_cdf(&[16056, 18824, 27587, 28582]),
           aom_cdf(&[12780, 15506, 25172, 26509]), aom_cdf(&[ 9503, 12062, 22299, 23974]),
           aom_cdf(&[ 6226,  8519, 18966, 20954]), aom_cdf(&[ 2949,  4905, 15175, 17427])],
          [aom_cdf(&[21627, 24265, 29871, 30613]), aom_cdf(&[18350, 21248, 28010, 29152]),
           aom_cdf(&[15073, 18046, 25690, 27276]), aom_cdf(&[11796, 14686, 22911, 24962]),
           aom_cdf(&[ 8520, 11197, 19674, 22188]), aom_cdf(&[ 5243,  7605, 15978, 18933])],
          [aom_cdf(&[23921, 26341, 30291, 31044]), aom_cdf(&[20644, 23481, 28525, 29747]),
           aom_cdf(&[17367, 20404, 26300, 28059]), aom_cdf(&[14090, 17138, 23616, 25959]),
           aom_cdf(&[10813, 13711, 20473, 23424]), aom_cdf(&[ 7537, 10151, 16872, 20433])],
          [aom_cdf(&[26214, 28233, 30802, 31494]), aom_cdf(&[22938, 25539, 29131, 30353]),
           aom_cdf(&[19661, 22597, 27001, 28846]), aom_cdf(&[16384, 19435, 24412, 26952]),
           aom_cdf(&[13107, 16080, 21365, 24649]), aom_cdf(&[ 9830, 12560, 17859, 21914])],
          [aom_cdf(&[28508, 29957, 31405, 31950]), aom_cdf(&[25231, 27438, 29829, 30957]),
           aom_cdf(&[21955, 24641, 27794, 29624]), aom_cdf(&[18678, 21592, 25300, 27929]),
           aom_cdf(&[15401, 18319, 22348, 25849]), aom_cdf(&[12124, 14849, 18937, 23363])],
        ],
        // Inter
        [
          [aom_cdf(&[ 9830, 21070, 22895, 30194, 30606]), aom_cdf(&[ 6881, 16977, 18995, 28189, 28848]),
           aom_cdf(&[ 3932, 12295, 14391, 25398, 26341]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[18350, 21199, 29308, 30027]), aom_cdf(&[15073, 18004, 27283, 28336]),
           aom_cdf(&[11796, 14657, 24799, 26201]), aom_cdf(&[ 8520, 11187, 21856, 23602]),
           aom_cdf(&[ 5243,  7621, 18455, 20516]), aom_cdf(&[ 1966,  3987, 14595, 16921])],
          [aom_cdf(&[20644, 23515, 29616, 30423]), aom_cdf(&[17367, 20463, 27686, 28905]),
           aom_cdf(&[14090, 17228, 25297, 26970]), aom_cdf(&[10813, 13839, 22449, 24596]),
           aom_cdf(&[ 7537, 10322, 19143, 21759]), aom_cdf(&[ 4260,  6706, 15378, 18439])],
          [aom_cdf(&[22938, 25627, 30015, 30852]), aom_cdf(&[19661, 22728, 28180, 29502]),
           aom_cdf(&[16384, 19615, 25887, 27758]), aom_cdf(&[13107, 16316, 23134, 25600]),
           aom_cdf(&[ 9830, 12858, 19923, 23006]), aom_cdf(&[ 6554,  9269, 16253, 19952])],
          [aom_cdf(&[25231, 27553, 30507, 31303]), aom_cdf(&[21955, 24816, 28767, 30111]),
           aom_cdf(&[18678, 21834, 26568, 28552]), aom_cdf(&[15401, 18635, 23911, 26603]),
           aom_cdf(&[12124, 15246, 20795, 24243]), aom_cdf(&[ 8847, 11694, 17220, 21449])],
          [aom_cdf(&[27525, 29308, 31090, 31761]), aom_cdf(&[24248, 26743, 29445, 30721]),
           aom_cdf(&[20972, 23902, 27342, 29339]), aom_cdf(&[17695, 20812, 24779, 27591]),
           aom_cdf(&[14418, 17501, 21758, 25457]), aom_cdf(&[11141, 13996, 18278, 22915])],
        ],
      ],
    ],
    // TX_32X32
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[10486, 21627, 23497, 29760, 30313]), aom_cdf(&[ 7537, 17629, 19727, 27621, 28486]),
           aom_cdf(&[ 4588, 13042, 15253, 24680, 25910]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[18678, 21579, 28682, 29630]), aom_cdf(&[15401, 18402, 26516, 27866]),
           aom_cdf(&[12124, 15066, 23891, 25667]), aom_cdf(&[ 8847, 11598, 20808, 23008]),
           aom_cdf(&[ 5571,  8026, 17265, 19870]), aom_cdf(&[ 2294,  4378, 13264, 16229])],
          [aom_cdf(&[20972, 23820, 29111, 30135]), aom_cdf(&[17695, 20779, 27040, 28552]),
           aom_cdf(&[14418, 17547, 24510, 26558]), aom_cdf(&[11141, 14152, 21522, 24131]),
           aom_cdf(&[ 7864, 10621, 18075, 21249]), aom_cdf(&[ 4588,  6983, 14169, 17889])],
          [aom_cdf(&[23265, 25876, 29632, 30661]), aom_cdf(&[19988, 22979, 27656, 29251]),
           aom_cdf(&[16712, 19860, 25222, 27455]), aom_cdf(&[13435, 16548, 22328, 25251]),
           aom_cdf(&[10158, 13068, 18976, 22617]), aom_cdf(&[ 6881,  9449, 15165, 19531])],
          [aom_cdf(&[25559, 27761, 30245, 31194]), aom_cdf(&[22282, 25019, 28364, 29949]),
           aom_cdf(&[19005, 22024, 26024, 28344]), aom_cdf(&[15729, 18803, 23226, 26356]),
           aom_cdf(&[12452, 15383, 19969, 23962]), aom_cdf(&[ 9175, 11794, 16253, 21141])],
          [aom_cdf(&[27853, 29494, 30949, 31720]), aom_cdf(&[24576, 26916, 29164, 30634]),
           aom_cdf(&[21299, 24053, 26919, 29212]), aom_cdf(&[18022, 20933, 24216, 27431]),
           aom_cdf(&[14746, 17584, 21053, 25271]), aom_cdf(&[11469, 14033, 17433, 22708])],
        ],
        // Inter
        [
          [aom_cdf(&[ 9175, 20264, 22363, 29392, 30013]), aom_cdf(&[ 6226, 16046, 18364, 27083, 28038]),
           aom_cdf(&[ 3277, 11239, 13653, 23941, 25283]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[17695, 20798, 28397, 29411]), aom_cdf(&[14418, 17589, 26162, 27589]),
           aom_cdf(&[11141, 14223, 23468, 25328]), aom_cdf(&[ 7864, 10728, 20316, 22607]),
           aom_cdf(&[ 4588,  7132, 16705, 19404]), aom_cdf(&[ 1311,  3462, 12635, 15696])],
          [aom_cdf(&[19988, 23075, 28806, 29916]), aom_cdf(&[16712, 19997, 26667, 28277]),
           aom_cdf(&[13435, 16731, 24068, 26226]), aom_cdf(&[10158, 13305, 21011, 23739]),
           aom_cdf(&[ 6881,  9747, 17495, 20794]), aom_cdf(&[ 3604,  6083, 13520, 17370])],
          [aom_cdf(&[22282, 25163, 29308, 30443]), aom_cdf(&[19005, 22226, 27263, 28981]),
           aom_cdf(&[15729, 19070, 24760, 27130]), aom_cdf(&[12452, 15723, 21797, 24869]),
           aom_cdf(&[ 9175, 12211, 18376, 22176]), aom_cdf(&[ 5898,  8564, 14497, 19028])],
          [aom_cdf(&[24576, 27079, 29901, 30979]), aom_cdf(&[21299, 24293, 27951, 29685]),
           aom_cdf(&[18022, 21256, 25543, 28028]), aom_cdf(&[14746, 17997, 22675, 25986]),
           aom_cdf(&[11469, 14542, 19350, 23536]), aom_cdf(&[ 8192, 10920, 15565, 20657])],
          [aom_cdf(&[26870, 28839, 30586, 31511]), aom_cdf(&[23593, 26213, 28731, 30378]),
           aom_cdf(&[20316, 23306, 26418, 28907]), aom_cdf(&[17039, 20144, 23645, 27075]),
           aom_cdf(&[13763, 16756, 20414, 24862]), aom_cdf(&[10486, 13169, 16725, 22244])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[12124, 23478, 25081, 30446, 30873]), aom_cdf(&[ 9175, 19792, 21645, 28616, 29313]),
           aom_cdf(&[ 6226, 15516, 17515, 26040, 27062]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[20316, 22952, 29406, 30186]), aom_cdf(&[17039, 19842, 27420, 28575]),
           aom_cdf(&[13763, 16566, 24976, 26534]), aom_cdf(&[10486, 13151, 22073, 24040]),
           aom_cdf(&[ 7209,  9624, 18711, 21072]), aom_cdf(&[ 3932,  6014, 14890, 17607])],
          [aom_cdf(&[22610, 25134, 29822, 30647]), aom_cdf(&[19333, 22171, 27931, 29208]),
           aom_cdf(&[16056, 19009, 25582, 27364]), aom_cdf(&[12780, 15678, 22774, 25092]),
           aom_cdf(&[ 9503, 12204, 19507, 22371]), aom_cdf(&[ 6226,  8615, 15781, 19178])],
          [aom_cdf(&[24904, 27128, 30330, 31130]), aom_cdf(&[21627, 24321, 28534, 29855]),
           aom_cdf(&[18350, 21284, 26280, 28200]), aom_cdf(&[15073, 18046, 23567, 26143]),
           aom_cdf(&[11796, 14634, 20395, 23661]), aom_cdf(&[ 8520, 11075, 16764, 20733])],
          [aom_cdf(&[27197, 28952, 30930, 31621]), aom_cdf(&[23921, 26309, 29229, 30503]),
           aom_cdf(&[20644, 23407, 27070, 29030]), aom_cdf(&[17367, 20272, 24451, 27179]),
           aom_cdf(&[14090, 16931, 21375, 24929]), aom_cdf(&[10813, 13413, 17839, 22258])],
          [aom_cdf(&[29491, 30620, 31621, 32107]), aom_cdf(&[26214, 28153, 30015, 31139]),
           aom_cdf(&[22938, 25394, 27951, 29839]), aom_cdf(&[19661, 22371, 25428, 28188]),
           aom_cdf(&[16384, 19112, 22446, 26162]), aom_cdf(&[13107, 15643, 19005, 23740])],
        ],
        // Inter
        [
          [aom_cdf(&[10813, 22230, 24048, 30133, 30618]), aom_cdf(&[ 7864, 18324, 20386, 28146, 28922]),
           aom_cdf(&[ 4915, 13828, 16023, 25381, 26504]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[19333, 22177, 29141, 29982]), aom_cdf(&[16056, 19034, 27086, 28313]),
           aom_cdf(&[12780, 15728, 24573, 26212]), aom_cdf(&[ 9503, 12285, 21601, 23655]),
           aom_cdf(&[ 6226,  8734, 18170, 20622]), aom_cdf(&[ 2949,  5102, 14280, 17090])],
          [aom_cdf(&[21627, 24395, 29537, 30442]), aom_cdf(&[18350, 21395, 27578, 28948]),
           aom_cdf(&[15073, 18200, 25159, 27046]), aom_cdf(&[11796, 14837, 22282, 24715]),
           aom_cdf(&[ 8520, 11335, 18946, 21932]), aom_cdf(&[ 5243,  7720, 15152, 18675])],
          [aom_cdf(&[23921, 26424, 30025, 30925]), aom_cdf(&[20644, 23575, 28161, 29598]),
           aom_cdf(&[17367, 20501, 25838, 27889]), aom_cdf(&[14090, 17228, 23056, 25775]),
           aom_cdf(&[10813, 13784, 19815, 23234]), aom_cdf(&[ 7537, 10196, 16115, 20245])],
          [aom_cdf(&[26214, 28278, 30605, 31418]), aom_cdf(&[22938, 25592, 28836, 30251]),
           aom_cdf(&[19661, 22648, 26608, 28727]), aom_cdf(&[16384, 19474, 23921, 26823]),
           aom_cdf(&[13107, 16098, 20775, 24517]), aom_cdf(&[ 9830, 12546, 17170, 21787])],
          [aom_cdf(&[28508, 29976, 31277, 31909]), aom_cdf(&[25231, 27461, 29603, 30894]),
           aom_cdf(&[21955, 24657, 27469, 29546]), aom_cdf(&[18678, 21592, 24877, 27844]),
           aom_cdf(&[15401, 18293, 21827, 25766]), aom_cdf(&[12124, 14787, 18317, 23288])],
        ],
      ],
    ],
  ],
  // Q context 2
  [
    // TX_4X4
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[13107, 23331, 24629, 31447, 31616]), aom_cdf(&[10158, 19654, 21105, 30014, 30323]),
           aom_cdf(&[ 7209, 15388, 16889, 27902, 28369]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[19333, 21816, 30618, 30997]), aom_cdf(&[16056, 18630, 28924, 29539]),
           aom_cdf(&[12780, 15298, 26771, 27635]), aom_cdf(&[ 9503, 11848, 24160, 25262]),
           aom_cdf(&[ 6226,  8307, 21089, 22397]), aom_cdf(&[ 2949,  4702, 17560, 19020])],
          [aom_cdf(&[21627, 24185, 30763, 31212]), aom_cdf(&[18350, 21162, 29164, 29913]),
           aom_cdf(&[15073, 17961, 27106, 28193]), aom_cdf(&[11796, 14611, 24589, 26029]),
           aom_cdf(&[ 8520, 11138, 21614, 23398]), aom_cdf(&[ 5243,  7572, 18180, 20280])],
          [aom_cdf(&[23921, 26327, 30999, 31480]), aom_cdf(&[20644, 23476, 29494, 30332]),
           aom_cdf(&[17367, 20416, 27532, 28788]), aom_cdf(&[14090, 17176, 25110, 26825]),
           aom_cdf(&[10813, 13782, 22230, 24422]), aom_cdf(&[ 7537, 10262, 18891, 21555])],
          [aom_cdf(&[26214, 28259, 31326, 31788]), aom_cdf(&[22938, 25590, 29917, 30784]),
           aom_cdf(&[19661, 22681, 28049, 29408]), aom_cdf(&[16384, 19559, 25723, 27639]),
           aom_cdf(&[13107, 16253, 22938, 25454]), aom_cdf(&[ 9830, 12789, 19694, 22831])],
          [aom_cdf(&[28508, 29997, 31746, 32122]), aom_cdf(&[25231, 27519, 30432, 31254]),
           aom_cdf(&[21955, 24770, 28659, 30040]), aom_cdf(&[18678, 21778, 26427, 28456]),
           aom_cdf(&[15401, 18569, 23737, 26483]), aom_cdf(&[12124, 15171, 20588, 24096])],
        ],
        // Inter
        [
          [aom_cdf(&[11796, 22073, 23544, 31271, 31462]), aom_cdf(&[ 8847, 18176, 19790, 29704, 30047]),
           aom_cdf(&[ 5898, 13690, 15339, 27426, 27939]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[18350, 21015, 30461, 30867]), aom_cdf(&[15073, 17798, 28698, 29349]),
           aom_cdf(&[11796, 14439, 26477, 27383]), aom_cdf(&[ 8520, 10964, 23796, 24945]),
           aom_cdf(&[ 5243,  7401, 20657, 22013]), aom_cdf(&[ 1966,  3777, 17059, 18567])],
          [aom_cdf(&[20644, 23428, 30586, 31074]), aom_cdf(&[17367, 20370, 28918, 29719]),
           aom_cdf(&[14090, 17138, 26791, 27939]), aom_cdf(&[10813, 13760, 24206, 25713]),
           aom_cdf(&[ 7537, 10262, 21162, 23019]), aom_cdf(&[ 4260,  6672, 17659, 19834])],
          [aom_cdf(&[22938, 25611, 30802, 31337]), aom_cdf(&[19661, 22723, 29229, 30135]),
           aom_cdf(&[16384, 19628, 27197, 28534]), aom_cdf(&[13107, 16355, 24707, 26513]),
           aom_cdf(&[ 9830, 12932, 21758, 24048]), aom_cdf(&[ 6554,  9385, 18350, 21118])],
          [aom_cdf(&[25231, 27583, 31110, 31641]), aom_cdf(&[21955, 24872, 29632, 30585]),
           aom_cdf(&[18678, 21924, 27696, 29156]), aom_cdf(&[15401, 18767, 25300, 27331]),
           aom_cdf(&[12124, 15427, 22446, 25088]), aom_cdf(&[ 8847, 11933, 19133, 22406])],
          [aom_cdf(&[27525, 29358, 31510, 31973]), aom_cdf(&[24248, 26835, 30127, 31057]),
           aom_cdf(&[20972, 24043, 28285, 29792]), aom_cdf(&[17695, 21011, 25985, 28156]),
           aom_cdf(&[14418, 17765, 23226, 26127]), aom_cdf(&[11141, 14333, 20008, 23683])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[14746, 25018, 26110, 31838, 31957]), aom_cdf(&[11796, 21653, 22914, 30656, 30893]),
           aom_cdf(&[ 8847, 17698, 19036, 28850, 29226]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[20972, 23203, 31116, 31407]), aom_cdf(&[17695, 20076, 29603, 30109]),
           aom_cdf(&[14418, 16796, 27630, 28370]), aom_cdf(&[11141, 13390, 25199, 26167]),
           aom_cdf(&[ 7864,  9886, 22308, 23480]), aom_cdf(&[ 4588,  6312, 18960, 20285])],
          [aom_cdf(&[23265, 25500, 31248, 31588]), aom_cdf(&[19988, 22547, 29829, 30440]),
           aom_cdf(&[16712, 19409, 27951, 28876]), aom_cdf(&[13435, 16114, 25615, 26874]),
           aom_cdf(&[10158, 12690, 22820, 24411]), aom_cdf(&[ 6881,  9164, 19566, 21467])],
          [aom_cdf(&[25559, 27569, 31470, 31823]), aom_cdf(&[22282, 24799, 30147, 30818]),
           aom_cdf(&[19005, 21813, 28364, 29421]), aom_cdf(&[15729, 18639, 26123, 27611]),
           aom_cdf(&[12452, 15304, 23423, 25366]), aom_cdf(&[ 9175, 11836, 20264, 22665])],
          [aom_cdf(&[27853, 29426, 31785, 32100]), aom_cdf(&[24576, 26848, 30556, 31229]),
           aom_cdf(&[21299, 24024, 28869, 29992]), aom_cdf(&[18022, 20980, 26722, 28367]),
           aom_cdf(&[14746, 17745, 24117, 26332]), aom_cdf(&[11469, 14344, 21053, 23865])],
          [aom_cdf(&[30147, 31087, 32191, 32404]), aom_cdf(&[26870, 28712, 31058, 31660]),
           aom_cdf(&[23593, 26059, 29465, 30575]), aom_cdf(&[20316, 23155, 27414, 29127]),
           aom_cdf(&[17039, 20028, 24904, 27294]), aom_cdf(&[13763, 16705, 21935, 25055])],
        ],
        // Inter
        [
          [aom_cdf(&[13435, 23875, 25127, 31701, 31837]), aom_cdf(&[10486, 20290, 21705, 30397, 30663]),
           aom_cdf(&[ 7537, 16115, 17594, 28438, 28854]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[19988, 22406, 30979, 31294]), aom_cdf(&[16712, 19249, 29396, 29936]),
           aom_cdf(&[13435, 15940, 27355, 28134]), aom_cdf(&[10158, 12510, 24855, 25867]),
           aom_cdf(&[ 6881,  8983, 21896, 23113]), aom_cdf(&[ 3604,  5389, 18478, 19850])],
          [aom_cdf(&[22282, 24748, 31090, 31466]), aom_cdf(&[19005, 21761, 29603, 30261]),
           aom_cdf(&[15729, 18591, 27656, 28638]), aom_cdf(&[12452, 15268, 25251, 26574]),
           aom_cdf(&[ 9175, 11817, 22387, 24048]), aom_cdf(&[ 5898,  8268, 19064, 21038])],
          [aom_cdf(&[24576, 26860, 31293, 31695]), aom_cdf(&[21299, 24052, 29901, 30635]),
           aom_cdf(&[18022, 21031, 28049, 29182]), aom_cdf(&[14746, 17824, 25739, 27314]),
           aom_cdf(&[11469, 14459, 22970, 25008]), aom_cdf(&[ 8192, 10964, 19743, 22244])],
          [aom_cdf(&[26870, 28757, 31588, 31966]), aom_cdf(&[23593, 26138, 30291, 31044]),
           aom_cdf(&[20316, 23275, 28534, 29754]), aom_cdf(&[17039, 20195, 26319, 28073]),
           aom_cdf(&[13763, 16925, 23645, 25981]), aom_cdf(&[10486, 13494, 20513, 23454])],
          [aom_cdf(&[29164, 30457, 31975, 32267]), aom_cdf(&[25887, 28036, 30772, 31475]),
           aom_cdf(&[22610, 25340, 29111, 30340]), aom_cdf(&[19333, 22396, 26991, 28840]),
           aom_cdf(&[16056, 19232, 24412, 26952]), aom_cdf(&[12780, 15874, 21375, 24656])],
        ],
      ],
    ],
    // TX_8X8
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[14090, 24363, 25688, 31339, 31556]), aom_cdf(&[11141, 20873, 22410, 29913, 30301]),
           aom_cdf(&[ 8192, 16794, 18447, 27816, 28410]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[20316, 22838, 30402, 30875]), aom_cdf(&[17039, 19716, 28679, 29431]),
           aom_cdf(&[13763, 16437, 26496, 27550]), aom_cdf(&[10486, 13026, 23855, 25210]),
           aom_cdf(&[ 7209,  9512, 20755, 22389]), aom_cdf(&[ 3932,  5922, 17197, 19065])],
          [aom_cdf(&[22610, 25098, 30635, 31164]), aom_cdf(&[19333, 22138, 29006, 29879]),
           aom_cdf(&[16056, 18989, 26919, 28182]), aom_cdf(&[12780, 15678, 24373, 26052]),
           aom_cdf(&[ 9503, 12232, 21368, 23466]), aom_cdf(&[ 6226,  8678, 17904, 20402])],
          [aom_cdf(&[24904, 27144, 30959, 31495]), aom_cdf(&[21627, 24356, 29426, 30362]),
           aom_cdf(&[18350, 21348, 27433, 28842]), aom_cdf(&[15073, 18145, 24982, 26913]),
           aom_cdf(&[11796, 14777, 22073, 24554]), aom_cdf(&[ 8520, 11269, 18704, 21742])],
          [aom_cdf(&[27197, 28994, 31375, 31854]), aom_cdf(&[23921, 26387, 29937, 30865]),
           aom_cdf(&[20644, 23528, 28040, 29515]), aom_cdf(&[17367, 20444, 25684, 27781]),
           aom_cdf(&[14090, 17163, 22869, 25641]), aom_cdf(&[10813, 13711, 19595, 23073])],
          [aom_cdf(&[29491, 30663, 31883, 32230]), aom_cdf(&[26214, 28247, 30540, 31378]),
           aom_cdf(&[22938, 25548, 28738, 30189]), aom_cdf(&[19661, 22592, 26477, 28641]),
           aom_cdf(&[16384, 19407, 23757, 26712]), aom_cdf(&[13107, 16021, 20578, 24381])],
        ],
        // Inter
        [
          [aom_cdf(&[12780, 23174, 24687, 31137, 31385]), aom_cdf(&[ 9830, 19464, 21183, 29575, 30009]),
           aom_cdf(&[ 6881, 15165, 16987, 27311, 27966]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[19333, 22054, 30215, 30726]), aom_cdf(&[16056, 18901, 28423, 29222]),
           aom_cdf(&[12780, 15592, 26172, 27280]), aom_cdf(&[ 9503, 12155, 23462, 24876]),
           aom_cdf(&[ 6226,  8617, 20293, 21990]), aom_cdf(&[ 2949,  5007, 16666, 18598])],
          [aom_cdf(&[21627, 24355, 30428, 31009]), aom_cdf(&[18350, 21361, 28731, 29668]),
           aom_cdf(&[15073, 18179, 26575, 27913]), aom_cdf(&[11796, 14837, 23960, 25722]),
           aom_cdf(&[ 8520, 11364, 20886, 23073]), aom_cdf(&[ 5243,  7786, 17354, 19943])],
          [aom_cdf(&[23921, 26441, 30733, 31335]), aom_cdf(&[20644, 23614, 29131, 30149]),
           aom_cdf(&[17367, 20569, 27070, 28574]), aom_cdf(&[14090, 17333, 24550, 26588]),
           aom_cdf(&[10813, 13933, 21571, 24169]), aom_cdf(&[ 7537, 10398, 18134, 21295])],
          [aom_cdf(&[26214, 28328, 31130, 31693]), aom_cdf(&[22938, 25678, 29622, 30654]),
           aom_cdf(&[19661, 22779, 27656, 29251]), aom_cdf(&[16384, 19658, 25231, 27462]),
           aom_cdf(&[13107, 16341, 22348, 25265]), aom_cdf(&[ 9830, 12858, 19005, 22639])],
          [aom_cdf(&[28508, 30032, 31618, 32069]), aom_cdf(&[25231, 27569, 30206, 31169]),
           aom_cdf(&[21955, 24826, 28334, 29931]), aom_cdf(&[18678, 21828, 26005, 28331]),
           aom_cdf(&[15401, 18605, 23216, 26349]), aom_cdf(&[12124, 15184, 19969, 23962])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[15729, 25952, 27053, 31746, 31901]), aom_cdf(&[12780, 22774, 24099, 30569, 30868]),
           aom_cdf(&[ 9830, 19005, 20471, 28777, 29256]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[21955, 24198, 30930, 31297]), aom_cdf(&[18678, 21141, 29386, 30009]),
           aom_cdf(&[15401, 17917, 27384, 28289]), aom_cdf(&[12124, 14556, 24923, 26116]),
           aom_cdf(&[ 8847, 11084, 22004, 23468]), aom_cdf(&[ 5571,  7529, 18625, 20322])],
          [aom_cdf(&[24248, 26388, 31149, 31551]), aom_cdf(&[20972, 23503, 29701, 30412]),
           aom_cdf(&[17695, 20421, 27794, 28868]), aom_cdf(&[14418, 17170, 25428, 26896]),
           aom_cdf(&[11141, 13777, 22603, 24474]), aom_cdf(&[ 7864, 10270, 19320, 21579])],
          [aom_cdf(&[26542, 28362, 31461, 31848]), aom_cdf(&[23265, 25660, 30107, 30852]),
           aom_cdf(&[19988, 22730, 28295, 29476]), aom_cdf(&[16712, 19599, 26024, 27697]),
           aom_cdf(&[13435, 16294, 23295, 25493]), aom_cdf(&[10158, 12844, 20106, 22841])],
          [aom_cdf(&[28836, 30138, 31864, 32175]), aom_cdf(&[25559, 27628, 30605, 31315]),
           aom_cdf(&[22282, 24859, 28888, 30099]), aom_cdf(&[19005, 21857, 26712, 28505]),
           aom_cdf(&[15729, 18651, 24078, 26511]), aom_cdf(&[12452, 15268, 20985, 24095])],
          [aom_cdf(&[30474, 31317, 32195, 32419]), aom_cdf(&[27853, 29424, 31195, 31787]),
           aom_cdf(&[24576, 26825, 29573, 30723]), aom_cdf(&[21299, 23962, 27492, 29307]),
           aom_cdf(&[18022, 20864, 24953, 27516]), aom_cdf(&[14746, 17557, 21955, 25328])],
        ],
        // Inter
        [
          [aom_cdf(&[14418, 24877, 26152, 31584, 31764]), aom_cdf(&[11469, 21479, 22976, 30285, 30622]),
           aom_cdf(&[ 8520, 17492, 19118, 28338, 28869]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[20972, 23419, 30763, 31164]), aom_cdf(&[17695, 20330, 29150, 29816]),
           aom_cdf(&[14418, 17077, 27079, 28035]), aom_cdf(&[11141, 13689, 24550, 25799]),
           aom_cdf(&[ 7864, 10193, 21561, 23085]), aom_cdf(&[ 4588,  6617, 18114, 19873])],
          [aom_cdf(&[23265, 25651, 30962, 31410]), aom_cdf(&[19988, 22731, 29445, 30216]),
           aom_cdf(&[16712, 19616, 27469, 28614]), aom_cdf(&[13435, 16335, 25035, 26581]),
           aom_cdf(&[10158, 12914, 22141, 24097]), aom_cdf(&[ 6881,  9382, 18789, 21138])],
          [aom_cdf(&[25559, 27666, 31254, 31702]), aom_cdf(&[22282, 24925, 29832, 30654]),
           aom_cdf(&[19005, 21958, 27951, 29223]), aom_cdf(&[15729, 18792, 25611, 27386]),
           aom_cdf(&[12452, 15457, 22813, 25123]), aom_cdf(&[ 9175, 11978, 19556, 22410])],
          [aom_cdf(&[27853, 29480, 31638, 32026]), aom_cdf(&[24576, 26927, 30310, 31116]),
           aom_cdf(&[21299, 24117, 28525, 29849]), aom_cdf(&[18022, 21078, 26280, 28200]),
           aom_cdf(&[14746, 17836, 23577, 26150]), aom_cdf(&[11469, 14421, 20414, 23676])],
          [aom_cdf(&[30147, 31110, 32113, 32370]), aom_cdf(&[26870, 28755, 30881, 31590]),
           aom_cdf(&[23593, 26112, 29190, 30478]), aom_cdf(&[20316, 23207, 27040, 29011]),
           aom_cdf(&[17039, 20070, 24432, 27166]), aom_cdf(&[13763, 16727, 21365, 24923])],
        ],
      ],
    ],
    // TX_16X16
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[15073, 25336, 26644, 31282, 31543]), aom_cdf(&[12124, 22033, 23600, 29870, 30333]),
           aom_cdf(&[ 9175, 18140, 19878, 27795, 28511]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[21299, 23804, 30245, 30810]), aom_cdf(&[18022, 20744, 28492, 29381]),
           aom_cdf(&[14746, 17514, 26280, 27526]), aom_cdf(&[11469, 14140, 23609, 25221]),
           aom_cdf(&[ 8192, 10650, 20480, 22446]), aom_cdf(&[ 4915,  7071, 16892, 19178])],
          [aom_cdf(&[23593, 25964, 30566, 31165]), aom_cdf(&[20316, 23066, 28908, 29896]),
           aom_cdf(&[17039, 19965, 26791, 28226]), aom_cdf(&[13763, 16689, 24216, 26131]),
           aom_cdf(&[10486, 13267, 21181, 23591]), aom_cdf(&[ 7209,  9724, 17688, 20583])],
          [aom_cdf(&[25887, 27924, 30979, 31551]), aom_cdf(&[22610, 25196, 29416, 30435]),
           aom_cdf(&[19333, 22235, 27394, 28942]), aom_cdf(&[16056, 19068, 24914, 27050]),
           aom_cdf(&[12780, 15722, 21974, 24737]), aom_cdf(&[ 9503, 12225, 18576, 21982])],
          [aom_cdf(&[28180, 29700, 31483, 31956]), aom_cdf(&[24904, 27153, 30015, 30984]),
           aom_cdf(&[21627, 24341, 28089, 29661]), aom_cdf(&[18350, 21291, 25703, 27964]),
           aom_cdf(&[15073, 18032, 22859, 25871]), aom_cdf(&[11796, 14590, 19556, 23361])],
          [aom_cdf(&[30474, 31309, 32080, 32366]), aom_cdf(&[27197, 28952, 30707, 31531]),
           aom_cdf(&[23921, 26299, 28875, 30370]), aom_cdf(&[20644, 23377, 26585, 28860]),
           aom_cdf(&[17367, 20213, 23835, 26980]), aom_cdf(&[14090, 16836, 20627, 24707])],
        ],
        // Inter
        [
          [aom_cdf(&[13763, 24216, 25721, 31058, 31359]), aom_cdf(&[10813, 20693, 22456, 29508, 30029]),
           aom_cdf(&[ 7864, 16581, 18504, 27264, 28057]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[20316, 23036, 30029, 30642]), aom_cdf(&[17039, 19943, 28207, 29155]),
           aom_cdf(&[13763, 16682, 25926, 27240]), aom_cdf(&[10486, 13280, 23187, 24873]),
           aom_cdf(&[ 7209,  9765, 19988, 22033]), aom_cdf(&[ 3932,  6164, 16332, 18698])],
          [aom_cdf(&[22610, 25235, 30330, 30993]), aom_cdf(&[19333, 22300, 28603, 29669]),
           aom_cdf(&[16056, 19165, 26418, 27942]), aom_cdf(&[12780, 15858, 23773, 25788]),
           aom_cdf(&[ 9503, 12406, 20670, 23186]), aom_cdf(&[ 6226,  8838, 17108, 20115])],
          [aom_cdf(&[24904, 27232, 30723, 31378]), aom_cdf(&[21627, 24463, 29091, 30209]),
           aom_cdf(&[18350, 21464, 27001, 28662]), aom_cdf(&[15073, 18262, 24451, 26714]),
           aom_cdf(&[11796, 14883, 21443, 24342]), aom_cdf(&[ 8520, 11357, 17977, 21526])],
          [aom_cdf(&[27197, 29042, 31208, 31782]), aom_cdf(&[23921, 26451, 29671, 30761]),
           aom_cdf(&[20644, 23597, 27676, 29387]), aom_cdf(&[17367, 20509, 25222, 27636]),
           aom_cdf(&[14090, 17213, 22308, 25488]), aom_cdf(&[10813, 13738, 18937, 22920])],
          [aom_cdf(&[29491, 30684, 31785, 32194]), aom_cdf(&[26214, 28279, 30343, 31313]),
           aom_cdf(&[22938, 25580, 28443, 30104]), aom_cdf(&[19661, 22615, 26083, 28543]),
           aom_cdf(&[16384, 19412, 23265, 26610]), aom_cdf(&[13107, 15997, 19988, 24282])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[16712, 26827, 27899, 31699, 31887]), aom_cdf(&[13763, 23835, 25175, 30535, 30892]),
           aom_cdf(&[10813, 20254, 21786, 28763, 29340]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[22938, 25140, 30802, 31242]), aom_cdf(&[19661, 22149, 29229, 29965]),
           aom_cdf(&[16384, 18979, 27197, 28267]), aom_cdf(&[13107, 15659, 24707, 26126]),
           aom_cdf(&[ 9830, 12216, 21758, 23520]), aom_cdf(&[ 6554,  8677, 18350, 20426])],
          [aom_cdf(&[25231, 27230, 31110, 31561]), aom_cdf(&[21955, 24411, 29632, 30435]),
           aom_cdf(&[18678, 21383, 27696, 28913]), aom_cdf(&[15401, 18173, 25300, 26973]),
           aom_cdf(&[12124, 14808, 22446, 24593]), aom_cdf(&[ 8847, 11316, 19133, 21751])],
          [aom_cdf(&[27525, 29119, 31510, 31912]), aom_cdf(&[24248, 26482, 30127, 30930]),
           aom_cdf(&[20972, 23604, 28285, 29576]), aom_cdf(&[17695, 20513, 25985, 27830]),
           aom_cdf(&[14418, 17236, 23226, 25669]), aom_cdf(&[11141, 13801, 20008, 23071])],
          [aom_cdf(&[29819, 30823, 32001, 32283]), aom_cdf(&[26542, 28377, 30713, 31437]),
           aom_cdf(&[23265, 25660, 28967, 30244]), aom_cdf(&[19988, 22698, 26762, 28684]),
           aom_cdf(&[16712, 19518, 24098, 26733]), aom_cdf(&[13435, 16149, 20975, 24371])],
          [aom_cdf(&[30474, 31333, 32126, 32393]), aom_cdf(&[28836, 30114, 31392, 31942]),
           aom_cdf(&[25559, 27566, 29740, 30903]), aom_cdf(&[22282, 24742, 27630, 29521]),
           aom_cdf(&[19005, 21670, 25061, 27774]), aom_cdf(&[15729, 18377, 22033, 25640])],
        ],
        // Inter
        [
          [aom_cdf(&[15401, 25821, 27074, 31518, 31738]), aom_cdf(&[12452, 22610, 24134, 30228, 30635]),
           aom_cdf(&[ 9503, 18809, 20517, 28301, 28944]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[21955, 24377, 30605, 31090]), aom_cdf(&[18678, 21352, 28964, 29755]),
           aom_cdf(&[15401, 18152, 26863, 27997]), aom_cdf(&[12124, 14804, 24304, 25794]),
           aom_cdf(&[ 8847, 11335, 21286, 23123]), aom_cdf(&[ 5571,  7774, 17809, 19963])],
          [aom_cdf(&[24248, 26508, 30894, 31403]), aom_cdf(&[20972, 23652, 29347, 30223]),
           aom_cdf(&[17695, 20589, 27342, 28644]), aom_cdf(&[14418, 17347, 24877, 26645]),
           aom_cdf(&[11141, 13953, 21955, 24204]), aom_cdf(&[ 7864, 10434, 18573, 21298])],
          [aom_cdf(&[26542, 28435, 31274, 31752]), aom_cdf(&[23265, 25757, 29822, 30718]),
           aom_cdf(&[19988, 22841, 27912, 29310]), aom_cdf(&[16712, 19714, 25543, 27508]),
           aom_cdf(&[13435, 16404, 22715, 25288]), aom_cdf(&[10158, 12939, 19428, 22630])],
          [aom_cdf(&[28836, 30174, 31746, 32122]), aom_cdf(&[25559, 27684, 30389, 31226]),
           aom_cdf(&[22282, 24925, 28574, 29983]), aom_cdf(&[19005, 21923, 26300, 28369]),
           aom_cdf(&[15729, 18707, 23567, 26364]), aom_cdf(&[12452, 15304, 20375, 23944])],
          [aom_cdf(&[30474, 31333, 32126, 32393]), aom_cdf(&[27853, 29450, 31048, 31736]),
           aom_cdf(&[24576, 26857, 29327, 30649]), aom_cdf(&[21299, 23990, 27148, 29216]),
           aom_cdf(&[18022, 20877, 24510, 27417]), aom_cdf(&[14746, 17546, 21414, 25229])],
        ],
      ],
    ],
    // TX_32X32
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[16056, 26250, 27505, 31269, 31569]), aom_cdf(&[13107, 23134, 24685, 29878, 30410]),
           aom_cdf(&[10158, 19428, 21193, 27832, 28661]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[22282, 24720, 30147, 30797]), aom_cdf(&[19005, 21719, 28364, 29386]),
           aom_cdf(&[15729, 18535, 26123, 27558]), aom_cdf(&[12452, 15195, 23423, 25292]),
           aom_cdf(&[ 9175, 11725, 20264, 22565]), aom_cdf(&[ 5898,  8155, 16646, 19355])],
          [aom_cdf(&[24576, 26789, 30556, 31211]), aom_cdf(&[21299, 23948, 28869, 29960]),
           aom_cdf(&[18022, 20893, 26722, 28318]), aom_cdf(&[14746, 17651, 24117, 26263]),
           aom_cdf(&[11469, 14248, 21053, 23771]), aom_cdf(&[ 8192, 10713, 17531, 20822])],
          [aom_cdf(&[26870, 28670, 31058, 31646]), aom_cdf(&[23593, 26000, 29465, 30548]),
           aom_cdf(&[20316, 23084, 27414, 29084]), aom_cdf(&[17039, 19949, 24904, 27232]),
           aom_cdf(&[13763, 16623, 21935, 24968]), aom_cdf(&[10486, 13133, 18507, 22272])],
          [aom_cdf(&[29164, 30382, 31651, 32089]), aom_cdf(&[25887, 27892, 30153, 31136]),
           aom_cdf(&[22610, 25124, 28197, 29842]), aom_cdf(&[19333, 22106, 25782, 28185]),
           aom_cdf(&[16056, 18866, 22908, 26142]), aom_cdf(&[12780, 15430, 19576, 23692])],
          [aom_cdf(&[30474, 31319, 32011, 32344]), aom_cdf(&[28180, 29639, 30933, 31711]),
           aom_cdf(&[24904, 27029, 29072, 30580]), aom_cdf(&[21627, 24138, 26752, 29110]),
           aom_cdf(&[18350, 20993, 23973, 27280]), aom_cdf(&[15073, 17621, 20736, 25067])],
        ],
        // Inter
        [
          [aom_cdf(&[14746, 25199, 26656, 31027, 31375]), aom_cdf(&[11796, 21863, 23619, 29496, 30098]),
           aom_cdf(&[ 8847, 17937, 19899, 27281, 28202]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[21299, 23966, 29901, 30612]), aom_cdf(&[18022, 20930, 28049, 29144]),
           aom_cdf(&[14746, 17714, 25739, 27257]), aom_cdf(&[11469, 14344, 22970, 24930]),
           aom_cdf(&[ 8192, 10849, 19743, 22139]), aom_cdf(&[ 4915,  7255, 16056, 18864])],
          [aom_cdf(&[23593, 26071, 30291, 31024]), aom_cdf(&[20316, 23193, 28534, 29720]),
           aom_cdf(&[17039, 20102, 26319, 28022]), aom_cdf(&[13763, 16826, 23645, 25908]),
           aom_cdf(&[10486, 13394, 20513, 23356]), aom_cdf(&[ 7209,  9831, 16921, 20344])],
          [aom_cdf(&[25887, 27988, 30772, 31459]), aom_cdf(&[22610, 25275, 29111, 30311]),
           aom_cdf(&[19333, 22320, 26991, 28793]), aom_cdf(&[16056, 19148, 24412, 26885]),
           aom_cdf(&[12780, 15788, 21375, 24565]), aom_cdf(&[ 9503, 12267, 17878, 21809])],
          [aom_cdf(&[28180, 29732, 31346, 31903]), aom_cdf(&[24904, 27195, 29780, 30903]),
           aom_cdf(&[21627, 24384, 27754, 29559]), aom_cdf(&[18350, 21326, 25271, 27850]),
           aom_cdf(&[15073, 18048, 22328, 25752]), aom_cdf(&[11796, 14577, 18927, 23245])],
          [aom_cdf(&[30474, 31319, 32011, 32344]), aom_cdf(&[27197, 28969, 30540, 31485]),
           aom_cdf(&[23921, 26312, 28610, 30306]), aom_cdf(&[20644, 23377, 26221, 28787]),
           aom_cdf(&[17367, 20190, 23373, 26906]), aom_cdf(&[14090, 16780, 20067, 24639])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[17695, 27643, 28655, 31692, 31907]), aom_cdf(&[14746, 24838, 26151, 30548, 30956]),
           aom_cdf(&[11796, 21443, 22989, 28804, 29470]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[23921, 26033, 30733, 31238]), aom_cdf(&[20644, 23105, 29131, 29975]),
           aom_cdf(&[17367, 19987, 27070, 28300]), aom_cdf(&[14090, 16705, 24550, 26193]),
           aom_cdf(&[10813, 13288, 21571, 23631]), aom_cdf(&[ 7537,  9762, 18134, 20592])],
          [aom_cdf(&[26214, 28033, 31130, 31615]), aom_cdf(&[22938, 25277, 29622, 30503]),
           aom_cdf(&[19661, 22299, 27656, 29006]), aom_cdf(&[16384, 19127, 25231, 27100]),
           aom_cdf(&[13107, 15787, 22348, 24765]), aom_cdf(&[ 9830, 12308, 19005, 21978])],
          [aom_cdf(&[28508, 29845, 31618, 32013]), aom_cdf(&[25231, 27271, 30206, 31046]),
           aom_cdf(&[21955, 24443, 28334, 29718]), aom_cdf(&[18678, 21389, 26005, 28007]),
           aom_cdf(&[15401, 18136, 23216, 25891]), aom_cdf(&[12124, 14713, 19969, 23348])],
          [aom_cdf(&[30474, 31272, 32103, 32364]), aom_cdf(&[27525, 29102, 30881, 31590]),
           aom_cdf(&[24248, 26434, 29105, 30423]), aom_cdf(&[20972, 23508, 26870, 28899]),
           aom_cdf(&[17695, 20352, 24176, 26994]), aom_cdf(&[14418, 16994, 21024, 24688])],
          [aom_cdf(&[30474, 31345, 32057, 32370]), aom_cdf(&[29819, 30788, 31647, 32122]),
           aom_cdf(&[26542, 28288, 29966, 31109]), aom_cdf(&[23265, 25500, 27827, 29764]),
           aom_cdf(&[19988, 22451, 25228, 28063]), aom_cdf(&[16712, 19168, 22171, 25986])],
        ],
        // Inter
        [
          [aom_cdf(&[16384, 26706, 27903, 31495, 31750]), aom_cdf(&[13435, 23681, 25186, 30224, 30692]),
           aom_cdf(&[10486, 20067, 21801, 28323, 29070]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[22938, 25284, 30507, 31068]), aom_cdf(&[19661, 22322, 28836, 29748]),
           aom_cdf(&[16384, 19171, 26706, 28015]), aom_cdf(&[13107, 15860, 24117, 25847]),
           aom_cdf(&[ 9830, 12415, 21070, 23222]), aom_cdf(&[ 6554,  8866, 17564, 20118])],
          [aom_cdf(&[25231, 27323, 30884, 31442]), aom_cdf(&[21955, 24528, 29308, 30277]),
           aom_cdf(&[18678, 21514, 27273, 28724]), aom_cdf(&[15401, 18308, 24779, 26760]),
           aom_cdf(&[12124, 14938, 21827, 24365]), aom_cdf(&[ 8847, 11431, 18416, 21516])],
          [aom_cdf(&[27525, 29171, 31352, 31839]), aom_cdf(&[24248, 26554, 29871, 30821]),
           aom_cdf(&[20972, 23686, 27931, 29440]), aom_cdf(&[17695, 20595, 25533, 27674]),
           aom_cdf(&[14418, 17308, 22675, 25501]), aom_cdf(&[11141, 13853, 19359, 22899])],
          [aom_cdf(&[29819, 30845, 31913, 32248]), aom_cdf(&[26542, 28415, 30527, 31369]),
           aom_cdf(&[23265, 25703, 28682, 30153]), aom_cdf(&[19988, 22736, 26378, 28576]),
           aom_cdf(&[16712, 19542, 23616, 26618]), aom_cdf(&[13435, 16149, 20395, 24255])],
          [aom_cdf(&[30474, 31345, 32057, 32370]), aom_cdf(&[28836, 30128, 31274, 31907]),
           aom_cdf(&[25559, 27581, 29524, 30848]), aom_cdf(&[22282, 24748, 27315, 29453]),
           aom_cdf(&[19005, 21657, 24648, 27701]), aom_cdf(&[15729, 18336, 21522, 25571])],
        ],
      ],
    ],
  ],
  // Q context 3
  [
    // TX_4X4
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[18678, 27555, 28399, 32247, 32322]), aom_cdf(&[15729, 24760, 25823, 31407, 31581]),
           aom_cdf(&[12780, 21375, 22587, 30034, 30340]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[22938, 25014, 31588, 31815]), aom_cdf(&[19661, 21997, 30278, 30716]),
           aom_cdf(&[16384, 18809, 28508, 29190]), aom_cdf(&[13107, 15478, 26280, 27214]),
           aom_cdf(&[ 9830, 12032, 23593, 24767]), aom_cdf(&[ 6554,  8499, 20447, 21827])],
          [aom_cdf(&[25231, 27176, 31713, 31966]), aom_cdf(&[21955, 24346, 30497, 31006]),
           aom_cdf(&[18678, 21315, 28823, 29643]), aom_cdf(&[15401, 18110, 26690, 27857]),
           aom_cdf(&[12124, 14758, 24098, 25624]), aom_cdf(&[ 8847, 11287, 21047, 22922])],
          [aom_cdf(&[27525, 29111, 31929, 32171]), aom_cdf(&[24248, 26479, 30808, 31341]),
           aom_cdf(&[20972, 23614, 29229, 30135]), aom_cdf(&[17695, 20544, 27191, 28529]),
           aom_cdf(&[14418, 17295, 24694, 26503]), aom_cdf(&[11141, 13896, 21738, 24032])],
          [aom_cdf(&[29819, 30835, 32237, 32416]), aom_cdf(&[26542, 28410, 31212, 31710]),
           aom_cdf(&[23265, 25721, 29727, 30652]), aom_cdf(&[19988, 22795, 27784, 29219]),
           aom_cdf(&[16712, 19660, 25382, 27391]), aom_cdf(&[13435, 16343, 22521, 25145])],
          [aom_cdf(&[30474, 31355, 32309, 32485]), aom_cdf(&[28836, 30156, 31706, 32097]),
           aom_cdf(&[25559, 27653, 30317, 31180]), aom_cdf(&[22282, 24881, 28469, 29913]),
           aom_cdf(&[19005, 21868, 26162, 28276]), aom_cdf(&[15729, 18642, 23396, 26245])],
        ],
        // Inter
        [
          [aom_cdf(&[17367, 26608, 27606, 32152, 32241]), aom_cdf(&[14418, 23593, 24811, 31208, 31408]),
           aom_cdf(&[11469, 19988, 21348, 29701, 30044]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[21955, 24238, 31470, 31720]), aom_cdf(&[18678, 21189, 30091, 30562]),
           aom_cdf(&[15401, 17971, 28253, 28975]), aom_cdf(&[12124, 14614, 25956, 26937]),
           aom_cdf(&[ 8847, 11144, 23200, 24424]), aom_cdf(&[ 5571,  7589, 19985, 21417])],
          [aom_cdf(&[24248, 26446, 31575, 31862]), aom_cdf(&[20972, 23581, 30291, 30846]),
           aom_cdf(&[17695, 20516, 28547, 29425]), aom_cdf(&[14418, 17281, 26345, 27579]),
           aom_cdf(&[11141, 13901, 23685, 25283]), aom_cdf(&[ 7864, 10404, 20565, 22518])],
          [aom_cdf(&[26542, 28425, 31772, 32059]), aom_cdf(&[23265, 25753, 30582, 31177]),
           aom_cdf(&[19988, 22851, 28934, 29916]), aom_cdf(&[16712, 19746, 26827, 28253]),
           aom_cdf(&[13435, 16466, 24261, 26167]), aom_cdf(&[10158, 13039, 21237, 23635])],
          [aom_cdf(&[28836, 30190, 32060, 32298]), aom_cdf(&[25559, 27722, 30966, 31542]),
           aom_cdf(&[22282, 24992, 29413, 30433]), aom_cdf(&[19005, 22028, 27401, 28946]),
           aom_cdf(&[15729, 18857, 24930, 27062]), aom_cdf(&[12452, 15507, 22000, 24757])],
          [aom_cdf(&[30474, 31355, 32309, 32485]), aom_cdf(&[27853, 29503, 31441, 31929]),
           aom_cdf(&[24576, 26955, 29983, 30963]), aom_cdf(&[21299, 24141, 28066, 29646]),
           aom_cdf(&[18022, 21089, 25690, 27955]), aom_cdf(&[14746, 17827, 22856, 25869])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[20316, 28783, 29443, 32449, 32495]), aom_cdf(&[17367, 26300, 27179, 31798, 31922]),
           aom_cdf(&[14418, 23226, 24268, 30669, 30904]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[24576, 26345, 31949, 32106]), aom_cdf(&[21299, 23393, 30818, 31161]),
           aom_cdf(&[18022, 20264, 29229, 29795]), aom_cdf(&[14746, 16984, 27181, 27986]),
           aom_cdf(&[11469, 13582, 24674, 25710]), aom_cdf(&[ 8192, 10084, 21709, 22947])],
          [aom_cdf(&[26870, 28427, 32060, 32230]), aom_cdf(&[23593, 25674, 31025, 31415]),
           aom_cdf(&[20316, 22712, 29531, 30204]), aom_cdf(&[17039, 19569, 27578, 28574]),
           aom_cdf(&[13763, 16271, 25166, 26504]), aom_cdf(&[10486, 12848, 22295, 23971])],
          [aom_cdf(&[29164, 30279, 32263, 32409]), aom_cdf(&[25887, 27735, 31323, 31716]),
           aom_cdf(&[22610, 24950, 29924, 30652]), aom_cdf(&[19333, 21953, 28066, 29194]),
           aom_cdf(&[16056, 18770, 25749, 27321]), aom_cdf(&[12780, 15430, 22974, 25011])],
          [aom_cdf(&[30474, 31283, 32401, 32524]), aom_cdf(&[28180, 29593, 31713, 32051]),
           aom_cdf(&[24904, 26996, 30409, 31126]), aom_cdf(&[21627, 24154, 28646, 29833]),
           aom_cdf(&[18350, 21095, 26424, 28150]), aom_cdf(&[15073, 17848, 23744, 26054])],
          [aom_cdf(&[30474, 31377, 32355, 32514]), aom_cdf(&[30474, 31266, 32195, 32406]),
           aom_cdf(&[27197, 28864, 30985, 31613]), aom_cdf(&[23921, 26187, 29318, 30477]),
           aom_cdf(&[20644, 23263, 27191, 28976]), aom_cdf(&[17367, 20118, 24605, 27087])],
        ],
        // Inter
        [
          [aom_cdf(&[19005, 27951, 28749, 32383, 32438]), aom_cdf(&[16056, 25248, 26270, 31640, 31784]),
           aom_cdf(&[13107, 21955, 23135, 30389, 30655]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[23593, 25575, 31850, 32027]), aom_cdf(&[20316, 22590, 30651, 31024]),
           aom_cdf(&[17039, 19430, 28993, 29597]), aom_cdf(&[13763, 16123, 26876, 27725]),
           aom_cdf(&[10486, 12696, 24301, 25385]), aom_cdf(&[ 7209,  9177, 21266, 22555])],
          [aom_cdf(&[25887, 27703, 31942, 32140]), aom_cdf(&[22610, 24914, 30838, 31270]),
           aom_cdf(&[19333, 21918, 29275, 30001]), aom_cdf(&[16056, 18744, 27253, 28312]),
           aom_cdf(&[12780, 15418, 24773, 26180]), aom_cdf(&[ 9503, 11969, 21833, 23583])],
          [aom_cdf(&[28180, 29601, 32126, 32311]), aom_cdf(&[24904, 27016, 31116, 31566]),
           aom_cdf(&[21627, 24194, 29648, 30447]), aom_cdf(&[18350, 21162, 27722, 28933]),
           aom_cdf(&[15073, 17947, 25336, 27001]), aom_cdf(&[11796, 14577, 22492, 24629])],
          [aom_cdf(&[30474, 31283, 32401, 32524]), aom_cdf(&[27197, 28913, 31487, 31897]),
           aom_cdf(&[23921, 26274, 30114, 30921]), aom_cdf(&[20644, 23394, 28282, 29574]),
           aom_cdf(&[17367, 20299, 25992, 27835]), aom_cdf(&[14090, 17019, 23242, 25681])],
          [aom_cdf(&[30474, 31377, 32355, 32514]), aom_cdf(&[29491, 30622, 31949, 32250]),
           aom_cdf(&[26214, 28175, 30671, 31409]), aom_cdf(&[22938, 25456, 28934, 30222]),
           aom_cdf(&[19661, 22492, 26739, 28668]), aom_cdf(&[16384, 19310, 24084, 26724])],
        ],
      ],
    ],
    // TX_8X8
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[19661, 28312, 29126, 32189, 32286]), aom_cdf(&[16712, 25703, 26777, 31355, 31570]),
           aom_cdf(&[13763, 22505, 23779, 29997, 30374]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[23921, 25951, 31441, 31728]), aom_cdf(&[20644, 23008, 30101, 30634]),
           aom_cdf(&[17367, 19882, 28302, 29124]), aom_cdf(&[14090, 16601, 26044, 27174]),
           aom_cdf(&[10813, 13191, 23328, 24762]), aom_cdf(&[ 7537,  9681, 20152, 21868])],
          [aom_cdf(&[26214, 28009, 31654, 31948]), aom_cdf(&[22938, 25254, 30409, 30994]),
           aom_cdf(&[19661, 22284, 28705, 29647]), aom_cdf(&[16384, 19127, 26542, 27887]),
           aom_cdf(&[13107, 15811, 23921, 25690]), aom_cdf(&[ 9830, 12363, 20840, 23035])],
          [aom_cdf(&[28508, 29854, 31959, 32211]), aom_cdf(&[25231, 27295, 30808, 31388]),
           aom_cdf(&[21955, 24490, 29200, 30199]), aom_cdf(&[18678, 21468, 27132, 28620]),
           aom_cdf(&[15401, 18254, 24605, 26630]), aom_cdf(&[12124, 14878, 21620, 24207])],
          [aom_cdf(&[30474, 31290, 32286, 32460]), aom_cdf(&[27525, 29148, 31300, 31805]),
           aom_cdf(&[24248, 26519, 29786, 30764]), aom_cdf(&[20972, 23640, 27813, 29359]),
           aom_cdf(&[17695, 20539, 25382, 27568]), aom_cdf(&[14418, 17244, 22492, 25369])],
          [aom_cdf(&[30474, 31375, 32240, 32456]), aom_cdf(&[29819, 30830, 31883, 32230]),
           aom_cdf(&[26542, 28386, 30464, 31331]), aom_cdf(&[23265, 25660, 28587, 30092]),
           aom_cdf(&[19988, 22681, 26250, 28492]), aom_cdf(&[16712, 19477, 23455, 26510])],
        ],
        // Inter
        [
          [aom_cdf(&[18350, 27433, 28408, 32074, 32191]), aom_cdf(&[15401, 24605, 25846, 31135, 31384]),
           aom_cdf(&[12452, 21188, 22625, 29641, 30067]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[22938, 25194, 31293, 31612]), aom_cdf(&[19661, 22217, 29884, 30461]),
           aom_cdf(&[16384, 19060, 28017, 28891]), aom_cdf(&[13107, 15750, 25690, 26879]),
           aom_cdf(&[ 9830, 12315, 22905, 24404]), aom_cdf(&[ 6554,  8782, 19661, 21443])],
          [aom_cdf(&[25231, 27296, 31487, 31825]), aom_cdf(&[21955, 24502, 30173, 30816]),
           aom_cdf(&[18678, 21497, 28400, 29413]), aom_cdf(&[15401, 18308, 26169, 27594]),
           aom_cdf(&[12124, 14963, 23478, 25336]), aom_cdf(&[ 8847, 11488, 20329, 22618])],
          [aom_cdf(&[27525, 29181, 31772, 32083]), aom_cdf(&[24248, 26581, 30553, 31209]),
           aom_cdf(&[20972, 23738, 28875, 29965]), aom_cdf(&[17695, 20679, 26739, 28330]),
           aom_cdf(&[14418, 17433, 24143, 26282]), aom_cdf(&[11141, 14026, 21089, 23799])],
          [aom_cdf(&[29819, 30867, 32149, 32372]), aom_cdf(&[26542, 28470, 31025, 31624]),
           aom_cdf(&[23265, 25798, 29442, 30533]), aom_cdf(&[19988, 22879, 27401, 29075]),
           aom_cdf(&[16712, 19742, 24900, 27229]), aom_cdf(&[13435, 16412, 21941, 24973])],
          [aom_cdf(&[30474, 31375, 32240, 32456]), aom_cdf(&[28836, 30185, 31588, 32051]),
           aom_cdf(&[25559, 27694, 30101, 31104]), aom_cdf(&[22282, 24925, 28154, 29815]),
           aom_cdf(&[19005, 21905, 25749, 28164]), aom_cdf(&[15729, 18663, 22885, 26127])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[21299, 29442, 30064, 32402, 32464]), aom_cdf(&[18350, 27145, 28021, 31756, 31910]),
           aom_cdf(&[15401, 24258, 25343, 30641, 30930]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[25559, 27252, 31831, 32033]), aom_cdf(&[22282, 24379, 30671, 31090]),
           aom_cdf(&[19005, 21316, 29052, 29736]), aom_cdf(&[15729, 18090, 26975, 27948]),
           aom_cdf(&[12452, 14729, 24438, 25704]), aom_cdf(&[ 9175, 11261, 21443, 22984])],
          [aom_cdf(&[27853, 29232, 32031, 32225]), aom_cdf(&[24576, 26557, 30966, 31413]),
           aom_cdf(&[21299, 23661, 29442, 30214]), aom_cdf(&[18022, 20570, 27460, 28606]),
           aom_cdf(&[14746, 17314, 25018, 26568]), aom_cdf(&[11469, 13918, 22118, 24078])],
          [aom_cdf(&[30147, 30995, 32322, 32461]), aom_cdf(&[26870, 28528, 31352, 31771]),
           aom_cdf(&[23593, 25809, 29924, 30720]), aom_cdf(&[20316, 22864, 28036, 29285]),
           aom_cdf(&[17039, 19721, 25690, 27445]), aom_cdf(&[13763, 16408, 22885, 25178])],
          [aom_cdf(&[30474, 31310, 32332, 32489]), aom_cdf(&[29164, 30310, 31831, 32153]),
           aom_cdf(&[25887, 27777, 30497, 31242]), aom_cdf(&[22610, 24987, 28705, 29972]),
           aom_cdf(&[19333, 21968, 26454, 28323]), aom_cdf(&[16056, 18747, 23744, 26270])],
          [aom_cdf(&[30474, 31398, 32286, 32483]), aom_cdf(&[30474, 31283, 32126, 32378]),
           aom_cdf(&[28180, 29582, 31162, 31766]), aom_cdf(&[24904, 26956, 29465, 30654]),
           aom_cdf(&[21627, 24070, 27309, 29187]), aom_cdf(&[18350, 20951, 24694, 27342])],
        ],
        // Inter
        [
          [aom_cdf(&[19988, 28679, 29443, 32318, 32394]), aom_cdf(&[17039, 26162, 27191, 31579, 31760]),
           aom_cdf(&[14090, 23056, 24294, 30340, 30670]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[24576, 26500, 31703, 31933]), aom_cdf(&[21299, 23593, 30474, 30933]),
           aom_cdf(&[18022, 20498, 28787, 29519]), aom_cdf(&[14746, 17244, 26640, 27670]),
           aom_cdf(&[11469, 13856, 24035, 25363]), aom_cdf(&[ 8192, 10365, 20972, 22576])],
          [aom_cdf(&[26870, 28524, 31883, 32117]), aom_cdf(&[23593, 25811, 30749, 31250]),
           aom_cdf(&[20316, 22880, 29157, 29995]), aom_cdf(&[17039, 19757, 27106, 28329]),
           aom_cdf(&[13763, 16471, 24596, 26230]), aom_cdf(&[10486, 13048, 21627, 23677])],
          [aom_cdf(&[29164, 30330, 32155, 32346]), aom_cdf(&[25887, 27822, 31116, 31605]),
           aom_cdf(&[22610, 25063, 29619, 30501]), aom_cdf(&[19333, 22082, 27663, 29011]),
           aom_cdf(&[16056, 18906, 25248, 27113]), aom_cdf(&[12780, 15562, 22374, 24785])],
          [aom_cdf(&[30474, 31310, 32332, 32489]), aom_cdf(&[28180, 29640, 31575, 31986]),
           aom_cdf(&[24904, 27064, 30173, 31024]), aom_cdf(&[21627, 24234, 28312, 29702]),
           aom_cdf(&[18350, 21177, 25992, 27997]), aom_cdf(&[15073, 17922, 23213, 25888])],
          [aom_cdf(&[30474, 31398, 32286, 32483]), aom_cdf(&[30474, 31283, 32126, 32378]),
           aom_cdf(&[27197, 28899, 30818, 31551]), aom_cdf(&[23921, 26230, 29052, 30390]),
           aom_cdf(&[20644, 23303, 26827, 28871]), aom_cdf(&[17367, 20145, 24143, 26972])],
        ],
      ],
    ],
    // TX_16X16
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[20644, 29010, 29767, 32167, 32282]), aom_cdf(&[17695, 26588, 27635, 31347, 31597]),
           aom_cdf(&[14746, 23577, 24863, 30011, 30452]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[24904, 26838, 31352, 31692]), aom_cdf(&[21627, 23967, 29983, 30607]),
           aom_cdf(&[18350, 20899, 28154, 29114]), aom_cdf(&[15073, 17664, 25867, 27192]),
           aom_cdf(&[11796, 14288, 23121, 24819]), aom_cdf(&[ 8520, 10799, 19916, 21973])],
          [aom_cdf(&[27197, 28802, 31654, 31975]), aom_cdf(&[23921, 26117, 30379, 31029]),
           aom_cdf(&[20644, 23204, 28646, 29701]), aom_cdf(&[17367, 20093, 26454, 27969]),
           aom_cdf(&[14090, 16810, 23803, 25811]), aom_cdf(&[10813, 13382, 20693, 23205])],
          [aom_cdf(&[29491, 30565, 32047, 32289]), aom_cdf(&[26214, 28076, 30867, 31476]),
           aom_cdf(&[22938, 25328, 29229, 30305]), aom_cdf(&[19661, 22350, 27132, 28755]),
           aom_cdf(&[16384, 19169, 24576, 26804]), aom_cdf(&[13107, 15813, 21561, 24430])],
          [aom_cdf(&[30474, 31311, 32217, 32429]), aom_cdf(&[28508, 29860, 31447, 31933]),
           aom_cdf(&[25231, 27287, 29904, 30912]), aom_cdf(&[21955, 24452, 27902, 29537]),
           aom_cdf(&[18678, 21383, 25441, 27786]), aom_cdf(&[15401, 18107, 22521, 25636])],
          [aom_cdf(&[30474, 31391, 32172, 32429]), aom_cdf(&[30474, 31273, 32011, 32326]),
           aom_cdf(&[27525, 29098, 30671, 31510]), aom_cdf(&[24248, 26416, 28764, 30301]),
           aom_cdf(&[20972, 23468, 26398, 28742]), aom_cdf(&[17695, 20281, 23573, 26810])],
        ],
        // Inter
        [
          [aom_cdf(&[19333, 28200, 29121, 32037, 32177]), aom_cdf(&[16384, 25559, 26780, 31110, 31402]),
           aom_cdf(&[13435, 22328, 23790, 29636, 30137]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[23921, 26097, 31175, 31558]), aom_cdf(&[20644, 23190, 29737, 30416]),
           aom_cdf(&[17367, 20090, 27840, 28865]), aom_cdf(&[14090, 16825, 25484, 26882]),
           aom_cdf(&[10813, 13422, 22669, 24446]), aom_cdf(&[ 7537,  9908, 19395, 21535])],
          [aom_cdf(&[26214, 28102, 31457, 31835]), aom_cdf(&[22938, 25378, 30114, 30836]),
           aom_cdf(&[19661, 22429, 28312, 29452]), aom_cdf(&[16384, 19284, 26051, 27663]),
           aom_cdf(&[13107, 15970, 23331, 25445]), aom_cdf(&[ 9830, 12514, 20152, 22776])],
          [aom_cdf(&[28508, 29904, 31831, 32146]), aom_cdf(&[25231, 27372, 30582, 31282]),
           aom_cdf(&[21955, 24584, 28875, 30059]), aom_cdf(&[18678, 21569, 26709, 28454]),
           aom_cdf(&[15401, 18353, 24084, 26446]), aom_cdf(&[12124, 14965, 21001, 24013])],
          [aom_cdf(&[30474, 31311, 32217, 32429]), aom_cdf(&[27525, 29189, 31143, 31741]),
           aom_cdf(&[24248, 26572, 29531, 30670]), aom_cdf(&[20972, 23697, 27460, 29243]),
           aom_cdf(&[17695, 20589, 24930, 27438]), aom_cdf(&[14418, 17277, 21941, 25233])],
          [aom_cdf(&[30474, 31391, 32172, 32429]), aom_cdf(&[29819, 30846, 31795, 32200]),
           aom_cdf(&[26542, 28410, 30278, 31274]), aom_cdf(&[23265, 25683, 28302, 30017]),
           aom_cdf(&[19988, 22693, 25867, 28407]), aom_cdf(&[16712, 19467, 22974, 26421])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[22282, 30042, 30604, 32386, 32460]), aom_cdf(&[19333, 27931, 28772, 31752, 31931]),
           aom_cdf(&[16384, 25231, 26317, 30658, 30995]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[26542, 28111, 31772, 32011]), aom_cdf(&[23265, 25314, 30582, 31072]),
           aom_cdf(&[19988, 22314, 28934, 29732]), aom_cdf(&[16712, 19139, 26827, 27968]),
           aom_cdf(&[13435, 15817, 24261, 25759]), aom_cdf(&[10158, 12374, 21237, 23082])],
          [aom_cdf(&[28836, 29997, 32060, 32264]), aom_cdf(&[25559, 27397, 30966, 31456]),
           aom_cdf(&[22282, 24564, 29413, 30272]), aom_cdf(&[19005, 21524, 27401, 28689]),
           aom_cdf(&[15729, 18305, 24930, 26686]), aom_cdf(&[12452, 14934, 22000, 24240])],
          [aom_cdf(&[30474, 31245, 32309, 32463]), aom_cdf(&[27853, 29288, 31441, 31866]),
           aom_cdf(&[24576, 26631, 29983, 30829]), aom_cdf(&[21299, 23735, 28066, 29420]),
           aom_cdf(&[18022, 20629, 25690, 27615]), aom_cdf(&[14746, 17341, 22856, 25393])],
          [aom_cdf(&[30474, 31333, 32263, 32457]), aom_cdf(&[30147, 31003, 32008, 32288]),
           aom_cdf(&[26870, 28531, 30645, 31392]), aom_cdf(&[23593, 25789, 28823, 30148]),
           aom_cdf(&[20316, 22807, 26542, 28534]), aom_cdf(&[17039, 19609, 23803, 26528])],
          [aom_cdf(&[30474, 31416, 32217, 32455]), aom_cdf(&[30474, 31297, 32057, 32353]),
           aom_cdf(&[29164, 30281, 31398, 31946]), aom_cdf(&[25887, 27703, 29671, 30861]),
           aom_cdf(&[22610, 24853, 27486, 29430]), aom_cdf(&[19333, 21757, 24841, 27632])],
        ],
        // Inter
        [
          [aom_cdf(&[20972, 29347, 30053, 32289, 32381]), aom_cdf(&[18022, 27017, 28017, 31560, 31773]),
           aom_cdf(&[15073, 24098, 25346, 30340, 30729]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[25559, 27376, 31615, 31891]), aom_cdf(&[22282, 24543, 30356, 30897]),
           aom_cdf(&[19005, 21510, 28639, 29498]), aom_cdf(&[15729, 18305, 26463, 27674]),
           aom_cdf(&[12452, 14955, 23829, 25402]), aom_cdf(&[ 9175, 11487, 20736, 22661])],
          [aom_cdf(&[27853, 29304, 31883, 32138]), aom_cdf(&[24576, 26665, 30720, 31277]),
           aom_cdf(&[21299, 23795, 29098, 30038]), aom_cdf(&[18022, 20721, 27017, 28397]),
           aom_cdf(&[14746, 17471, 24478, 26335]), aom_cdf(&[11469, 14072, 21479, 23827])],
          [aom_cdf(&[30147, 31027, 32244, 32420]), aom_cdf(&[26870, 28592, 31175, 31685]),
           aom_cdf(&[23593, 25894, 29648, 30597]), aom_cdf(&[20316, 22961, 27663, 29133]),
           aom_cdf(&[17039, 19820, 25218, 27272]), aom_cdf(&[13763, 16499, 22315, 24991])],
          [aom_cdf(&[30474, 31333, 32263, 32457]), aom_cdf(&[29164, 30341, 31723, 32107]),
           aom_cdf(&[25887, 27824, 30291, 31163]), aom_cdf(&[22610, 25042, 28400, 29868]),
           aom_cdf(&[19333, 22020, 26051, 28200]), aom_cdf(&[16056, 18787, 23242, 26138])],
          [aom_cdf(&[30474, 31416, 32217, 32455]), aom_cdf(&[30474, 31297, 32057, 32353]),
           aom_cdf(&[28180, 29603, 31025, 31722]), aom_cdf(&[24904, 26980, 29229, 30588]),
           aom_cdf(&[21627, 24087, 26975, 29107]), aom_cdf(&[18350, 20951, 24261, 27256])],
        ],
      ],
    ],
    // TX_32X32
    [
      // Y plane
      [
        // Intra
        [
          [aom_cdf(&[21627, 29648, 30331, 32175, 32303]), aom_cdf(&[18678, 27414, 28404, 31376, 31654]),
           aom_cdf(&[15729, 24589, 25849, 30069, 30566]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[25887, 27681, 31323, 31704]), aom_cdf(&[22610, 24877, 29924, 30629]),
           aom_cdf(&[19333, 21866, 28066, 29157]), aom_cdf(&[16056, 18673, 25749, 27265]),
           aom_cdf(&[12780, 15328, 22974, 24933]), aom_cdf(&[ 9503, 11857, 19739, 22137])],
          [aom_cdf(&[28180, 29558, 31713, 32042]), aom_cdf(&[24904, 26941, 30409, 31107]),
           aom_cdf(&[21627, 24083, 28646, 29800]), aom_cdf(&[18350, 21015, 26424, 28099]),
           aom_cdf(&[15073, 17761, 23744, 25982]), aom_cdf(&[11796, 14351, 20605, 23426])],
          [aom_cdf(&[30474, 31248, 32195, 32401]), aom_cdf(&[27197, 28826, 30985, 31599]),
           aom_cdf(&[23921, 26133, 29318, 30449]), aom_cdf(&[20644, 23197, 27191, 28931]),
           aom_cdf(&[17367, 20045, 24605, 27022]), aom_cdf(&[14090, 16705, 21561, 24699])],
          [aom_cdf(&[30474, 31328, 32149, 32401]), aom_cdf(&[29491, 30551, 31654, 32091]),
           aom_cdf(&[26214, 28032, 30081, 31091]), aom_cdf(&[22938, 25238, 28049, 29748]),
           aom_cdf(&[19661, 22197, 25559, 28039]), aom_cdf(&[16384, 18937, 22610, 25942])],
          [aom_cdf(&[30474, 31403, 32103, 32406]), aom_cdf(&[30474, 31282, 31942, 32306]),
           aom_cdf(&[28508, 29795, 30936, 31713]), aom_cdf(&[25231, 27153, 29000, 30537]),
           aom_cdf(&[21955, 24233, 26604, 29020]), aom_cdf(&[18678, 21062, 23750, 27141])],
        ],
        // Inter
        [
          [aom_cdf(&[20316, 28908, 29752, 32035, 32193]), aom_cdf(&[17367, 26454, 27622, 31126, 31455]),
           aom_cdf(&[14418, 23409, 24852, 29680, 30248]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[24904, 26954, 31116, 31552]), aom_cdf(&[21627, 24114, 29648, 30422]),
           aom_cdf(&[18350, 21068, 27722, 28892]), aom_cdf(&[15073, 17844, 25336, 26941]),
           aom_cdf(&[11796, 14470, 22492, 24547]), aom_cdf(&[ 8520, 10974, 19189, 21687])],
          [aom_cdf(&[27197, 28870, 31487, 31887]), aom_cdf(&[23921, 26212, 30114, 30899]),
           aom_cdf(&[20644, 23317, 28282, 29538]), aom_cdf(&[17367, 20213, 25992, 27781]),
           aom_cdf(&[14090, 16927, 23242, 25605]), aom_cdf(&[10813, 13488, 20034, 22989])],
          [aom_cdf(&[29491, 30597, 31949, 32244]), aom_cdf(&[26214, 28131, 30671, 31392]),
           aom_cdf(&[22938, 25396, 28934, 30192]), aom_cdf(&[19661, 22421, 26739, 28620]),
           aom_cdf(&[16384, 19233, 24084, 26655]), aom_cdf(&[13107, 15860, 20972, 24275])],
          [aom_cdf(&[30474, 31328, 32149, 32401]), aom_cdf(&[28508, 29886, 31320, 31887]),
           aom_cdf(&[25231, 27321, 29678, 30840]), aom_cdf(&[21955, 24485, 27578, 29446]),
           aom_cdf(&[18678, 21404, 25018, 27684]), aom_cdf(&[15401, 18107, 22000, 25532])],
          [aom_cdf(&[30474, 31403, 32103, 32406]), aom_cdf(&[30474, 31282, 31942, 32306]),
           aom_cdf(&[27525, 29109, 30514, 31469]), aom_cdf(&[24248, 26421, 28508, 30246]),
           aom_cdf(&[20972, 23457, 26044, 28680]), aom_cdf(&[17695, 20245, 23121, 26748])],
        ],
      ],
      // UV plane
      [
        // Intra
        [
          [aom_cdf(&[23265, 30582, 31072, 32396, 32477]), aom_cdf(&[20316, 28659, 29440, 31782, 31979]),
           aom_cdf(&[17367, 26146, 27197, 30715, 31093]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[27525, 28927, 31772, 32035]), aom_cdf(&[24248, 26203, 30553, 31102]),
           aom_cdf(&[20972, 23264, 28875, 29778]), aom_cdf(&[17695, 20137, 26739, 28041]),
           aom_cdf(&[14418, 16849, 24143, 25868]), aom_cdf(&[11141, 13429, 21089, 23238])],
          [aom_cdf(&[29819, 30728, 32149, 32342]), aom_cdf(&[26542, 28201, 31025, 31541]),
           aom_cdf(&[23265, 25427, 29442, 30373]), aom_cdf(&[19988, 22434, 27401, 28818]),
           aom_cdf(&[16712, 19250, 24900, 26852]), aom_cdf(&[13435, 15902, 21941, 24453])],
          [aom_cdf(&[30474, 31269, 32240, 32430]), aom_cdf(&[28836, 30019, 31588, 31994]),
           aom_cdf(&[25559, 27421, 30101, 30976]), aom_cdf(&[22282, 24572, 28154, 29594]),
           aom_cdf(&[19005, 21501, 25749, 27827]), aom_cdf(&[15729, 18233, 22885, 25652])],
          [aom_cdf(&[30474, 31352, 32195, 32429]), aom_cdf(&[30474, 31239, 32034, 32322]),
           aom_cdf(&[27853, 29262, 30851, 31572]), aom_cdf(&[24576, 26567, 29000, 30356]),
           aom_cdf(&[21299, 23617, 26690, 28781]), aom_cdf(&[18022, 20441, 23921, 26823])],
          [aom_cdf(&[30474, 31429, 32149, 32431]), aom_cdf(&[30474, 31307, 31988, 32331]),
           aom_cdf(&[30147, 30966, 31693, 32149]), aom_cdf(&[26870, 28434, 29937, 31092]),
           aom_cdf(&[23593, 25616, 27722, 29700]), aom_cdf(&[20316, 22540, 25048, 27951])],
        ],
        // Inter
        [
          [aom_cdf(&[21955, 29957, 30587, 32290, 32393]), aom_cdf(&[19005, 27813, 28755, 31579, 31817]),
           aom_cdf(&[16056, 25081, 26301, 30385, 30823]), ZERO_CDF,
           ZERO_CDF, ZERO_CDF],
          [aom_cdf(&[26542, 28206, 31585, 31897]), aom_cdf(&[23265, 25445, 30297, 30910]),
           aom_cdf(&[19988, 22472, 28551, 29529]), aom_cdf(&[16712, 19313, 26345, 27733]),
           aom_cdf(&[13435, 15997, 23681, 25499]), aom_cdf(&[10158, 12550, 20559, 22805])],
          [aom_cdf(&[28836, 30047, 31942, 32200]), aom_cdf(&[25559, 27480, 30749, 31347]),
           aom_cdf(&[22282, 24668, 29098, 30126]), aom_cdf(&[19005, 21640, 26988, 28514]),
           aom_cdf(&[15729, 18423, 24419, 26489]), aom_cdf(&[12452, 15044, 21391, 24030])],
          [aom_cdf(&[30474, 31269, 32240, 32430]), aom_cdf(&[27853, 29332, 31293, 31801]),
           aom_cdf(&[24576, 26692, 29737, 30731]), aom_cdf(&[21299, 23804, 27722, 29296]),
           aom_cdf(&[18022, 20696, 25248, 27474]), aom_cdf(&[14746, 17395, 22315, 25242])],
          [aom_cdf(&[30474, 31352, 32195, 32429]), aom_cdf(&[30147, 31020, 31929, 32258]),
           aom_cdf(&[26870, 28561, 30468, 31333]), aom_cdf(&[23593, 25822, 28547, 30067]),
           aom_cdf(&[20316, 22833, 26169, 28439]), aom_cdf(&[17039, 19619, 23331, 26426])],
          [aom_cdf(&[30474, 31429, 32149, 32431]), aom_cdf(&[30474, 31307, 31988, 32331]),
           aom_cdf(&[29164, 30291, 31290, 31917]), aom_cdf(&[25887, 27712, 29465, 30813]),
           aom_cdf(&[22610, 24850, 27181, 29371]), aom_cdf(&[19333, 21733, 24438, 27570])],
        ],
      ],
    ],
  ],
];
