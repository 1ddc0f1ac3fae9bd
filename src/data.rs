// Static nuclear data tables
//
// Natural isotopic abundances are stored per element (by atomic number) and
// flattened into a (Z, A) lookup on first use. Light nuclide masses are given
// as mass excesses, the way they are tabulated in the atomic mass evaluation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Atomic mass unit in MeV.
pub const AMU_C2: f64 = 931.49410;
pub const ELECTRON_MASS: f64 = 0.51099895;
pub const NEUTRON_MASS: f64 = 939.56542;
pub const PROTON_MASS: f64 = 938.27209;
pub const DEUTERON_MASS: f64 = 1875.61294;
pub const TRITON_MASS: f64 = 2808.92113;
pub const HELIUM3_MASS: f64 = 2808.39161;
pub const ALPHA_MASS: f64 = 3727.3794;
pub const CHARGED_PION_MASS: f64 = 139.57039;
pub const NEUTRAL_PION_MASS: f64 = 134.9768;

/// Element symbols indexed by `Z - 1`.
pub const ELEMENT_SYMBOLS: [&str; 92] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U",
];

/// Symbol for atomic number `z`, if it is within the table.
pub fn element_symbol(z: i32) -> Option<&'static str> {
    if z < 1 {
        return None;
    }
    ELEMENT_SYMBOLS.get((z - 1) as usize).copied()
}

/// Natural terrestrial abundances (atom fraction) per element: `(Z, [(A, abundance)])`.
///
/// Elements with a single stable isotope carry 1.0. Elements without stable
/// isotopes (Tc, Pm, Po..Ac) are absent.
const ABUNDANCE_BY_ELEMENT: &[(i32, &[(i32, f64)])] = &[
    (1, &[(1, 0.99984426), (2, 0.00015574)]),
    (2, &[(3, 0.000002), (4, 0.999998)]),
    (3, &[(6, 0.07589), (7, 0.92411)]),
    (4, &[(9, 1.0)]),
    (5, &[(10, 0.1982), (11, 0.8018)]),
    (6, &[(12, 0.988922), (13, 0.011078)]),
    (7, &[(14, 0.996337), (15, 0.003663)]),
    (8, &[(16, 0.9976206), (17, 0.000379), (18, 0.0020004)]),
    (9, &[(19, 1.0)]),
    (10, &[(20, 0.9048), (21, 0.0027), (22, 0.0925)]),
    (11, &[(23, 1.0)]),
    (12, &[(24, 0.78951), (25, 0.1002), (26, 0.11029)]),
    (13, &[(27, 1.0)]),
    (14, &[(28, 0.9222968), (29, 0.0468316), (30, 0.0308716)]),
    (15, &[(31, 1.0)]),
    (16, &[(32, 0.9504074), (33, 0.0074869), (34, 0.0419599), (36, 0.0001458)]),
    (17, &[(35, 0.757647), (37, 0.242353)]),
    (18, &[(36, 0.003336), (38, 0.000629), (40, 0.996035)]),
    (19, &[(39, 0.932581), (40, 0.000117), (41, 0.067302)]),
    (20, &[(40, 0.96941), (42, 0.00647), (43, 0.00135), (44, 0.02086), (46, 0.00004), (48, 0.00187)]),
    (21, &[(45, 1.0)]),
    (22, &[(46, 0.0825), (47, 0.0744), (48, 0.7372), (49, 0.0541), (50, 0.0518)]),
    (23, &[(50, 0.0025), (51, 0.9975)]),
    (24, &[(50, 0.04345), (52, 0.83789), (53, 0.09501), (54, 0.02365)]),
    (25, &[(55, 1.0)]),
    (26, &[(54, 0.05845), (56, 0.91754), (57, 0.02119), (58, 0.00282)]),
    (27, &[(59, 1.0)]),
    (28, &[(58, 0.680769), (60, 0.262231), (61, 0.011399), (62, 0.036345), (64, 0.009256)]),
    (29, &[(63, 0.6915), (65, 0.3085)]),
    (30, &[(64, 0.4917), (66, 0.2773), (67, 0.0404), (68, 0.1845), (70, 0.0061)]),
    (31, &[(69, 0.60108), (71, 0.39892)]),
    (32, &[(70, 0.2052), (72, 0.2745), (73, 0.0776), (74, 0.3652), (76, 0.0775)]),
    (33, &[(75, 1.0)]),
    (34, &[(74, 0.0086), (76, 0.0923), (77, 0.076), (78, 0.2369), (80, 0.498), (82, 0.0882)]),
    (35, &[(79, 0.50686), (81, 0.49314)]),
    (36, &[(78, 0.00355), (80, 0.02286), (82, 0.11593), (83, 0.115), (84, 0.56987), (86, 0.17279)]),
    (37, &[(85, 0.7217), (87, 0.2783)]),
    (38, &[(84, 0.0056), (86, 0.0986), (87, 0.07), (88, 0.8258)]),
    (39, &[(89, 1.0)]),
    (40, &[(90, 0.5145), (91, 0.1122), (92, 0.1715), (94, 0.1738), (96, 0.028)]),
    (41, &[(93, 1.0)]),
    (42, &[(92, 0.14649), (94, 0.09187), (95, 0.15873), (96, 0.16673), (97, 0.09582), (98, 0.24292), (100, 0.09744)]),
    (44, &[(96, 0.0554), (98, 0.0187), (99, 0.1276), (100, 0.126), (101, 0.1706), (102, 0.3155), (104, 0.1862)]),
    (45, &[(103, 1.0)]),
    (46, &[(102, 0.0102), (104, 0.1114), (105, 0.2233), (106, 0.2733), (108, 0.2646), (110, 0.1172)]),
    (47, &[(107, 0.51839), (109, 0.48161)]),
    (48, &[(106, 0.01245), (108, 0.00888), (110, 0.1247), (111, 0.12795), (112, 0.24109), (113, 0.12227), (114, 0.28754), (116, 0.07512)]),
    (49, &[(113, 0.04281), (115, 0.95719)]),
    (50, &[(112, 0.0097), (114, 0.0066), (115, 0.0034), (116, 0.1454), (117, 0.0768), (118, 0.2422), (119, 0.0859), (120, 0.3258), (122, 0.0463), (124, 0.0579)]),
    (51, &[(121, 0.5721), (123, 0.4279)]),
    (52, &[(120, 0.0009), (122, 0.0255), (123, 0.0089), (124, 0.0474), (125, 0.0707), (126, 0.1884), (128, 0.3174), (130, 0.3408)]),
    (53, &[(127, 1.0)]),
    (54, &[(124, 0.00095), (126, 0.00089), (128, 0.0191), (129, 0.26401), (130, 0.04071), (131, 0.21232), (132, 0.26909), (134, 0.10436), (136, 0.08857)]),
    (55, &[(133, 1.0)]),
    (56, &[(130, 0.0011), (132, 0.001), (134, 0.0242), (135, 0.0659), (136, 0.0785), (137, 0.1123), (138, 0.717)]),
    (57, &[(138, 0.0008881), (139, 0.9991119)]),
    (58, &[(136, 0.00186), (138, 0.00251), (140, 0.88449), (142, 0.11114)]),
    (59, &[(141, 1.0)]),
    (60, &[(142, 0.27153), (143, 0.12173), (144, 0.23798), (145, 0.08293), (146, 0.17189), (148, 0.05756), (150, 0.05638)]),
    (62, &[(144, 0.0308), (147, 0.15), (148, 0.1125), (149, 0.1382), (150, 0.0737), (152, 0.2674), (154, 0.2274)]),
    (63, &[(151, 0.4781), (153, 0.5219)]),
    (64, &[(152, 0.002), (154, 0.0218), (155, 0.148), (156, 0.2047), (157, 0.1565), (158, 0.2484), (160, 0.2186)]),
    (65, &[(159, 1.0)]),
    (66, &[(156, 0.00056), (158, 0.00095), (160, 0.02329), (161, 0.18889), (162, 0.25475), (163, 0.24896), (164, 0.2826)]),
    (67, &[(165, 1.0)]),
    (68, &[(162, 0.00139), (164, 0.01601), (166, 0.33503), (167, 0.22869), (168, 0.26978), (170, 0.1491)]),
    (69, &[(169, 1.0)]),
    (70, &[(168, 0.00123), (170, 0.02982), (171, 0.14086), (172, 0.21686), (173, 0.16103), (174, 0.32025), (176, 0.12995)]),
    (71, &[(175, 0.97401), (176, 0.02599)]),
    (72, &[(174, 0.0016), (176, 0.0526), (177, 0.186), (178, 0.2728), (179, 0.1362), (180, 0.3508)]),
    (73, &[(181, 0.9998799)]),
    (74, &[(180, 0.0012), (182, 0.265), (183, 0.1431), (184, 0.3064), (186, 0.2843)]),
    (75, &[(185, 0.374), (187, 0.626)]),
    (76, &[(184, 0.0002), (186, 0.0159), (187, 0.0196), (188, 0.1324), (189, 0.1615), (190, 0.2626), (192, 0.4078)]),
    (77, &[(191, 0.373), (193, 0.627)]),
    (78, &[(190, 0.00012), (192, 0.00782), (194, 0.32864), (195, 0.33775), (196, 0.25211), (198, 0.07356)]),
    (79, &[(197, 1.0)]),
    (80, &[(196, 0.0015), (198, 0.1004), (199, 0.1694), (200, 0.2314), (201, 0.1317), (202, 0.2974), (204, 0.0682)]),
    (81, &[(203, 0.29524), (205, 0.70476)]),
    (82, &[(204, 0.014), (206, 0.241), (207, 0.221), (208, 0.524)]),
    (83, &[(209, 1.0)]),
    (90, &[(230, 0.0002), (232, 0.9998)]),
    (91, &[(231, 1.0)]),
    (92, &[(234, 0.000054), (235, 0.007204), (238, 0.992742)]),
];

/// Natural abundance keyed by `(Z, A)`.
pub static NATURAL_ABUNDANCE: Lazy<HashMap<(i32, i32), f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for &(z, isotopes) in ABUNDANCE_BY_ELEMENT {
        for &(a, abundance) in isotopes {
            m.insert((z, a), abundance);
        }
    }
    m
});

/// Tabulated light nuclide: charge, mass number, mass excess (MeV) and twice the ground-state spin.
#[derive(Debug, Clone, Copy)]
pub struct LightNuclide {
    pub z: i32,
    pub a: i32,
    pub mass_excess: f64,
    pub twice_spin: i32,
}

const fn light(z: i32, a: i32, mass_excess: f64, twice_spin: i32) -> LightNuclide {
    LightNuclide {
        z,
        a,
        mass_excess,
        twice_spin,
    }
}

/// Ground-state mass excesses for nuclides with A <= 20.
///
/// Heavier nuclides use the semi-empirical mass formula; light nuclides not
/// listed here are treated as unknown.
pub const LIGHT_NUCLIDES: &[LightNuclide] = &[
    light(0, 1, 8.07132, 1),
    light(1, 1, 7.28897, 1),
    light(1, 2, 13.13572, 2),
    light(1, 3, 14.94981, 1),
    light(2, 3, 14.93122, 1),
    light(2, 4, 2.42492, 0),
    light(2, 5, 11.231, 3),
    light(3, 5, 11.679, 3),
    light(2, 6, 17.5921, 0),
    light(3, 6, 14.0869, 2),
    light(4, 6, 18.375, 0),
    light(2, 7, 26.073, 3),
    light(3, 7, 14.9071, 3),
    light(4, 7, 15.7690, 3),
    light(2, 8, 31.609, 0),
    light(3, 8, 20.9458, 4),
    light(4, 8, 4.9416, 0),
    light(5, 8, 22.9215, 4),
    light(3, 9, 24.9549, 3),
    light(4, 9, 11.3484, 3),
    light(5, 9, 12.4161, 3),
    light(6, 9, 28.9107, 3),
    light(4, 10, 12.6074, 0),
    light(5, 10, 12.0507, 6),
    light(6, 10, 15.6986, 0),
    light(3, 11, 40.728, 3),
    light(4, 11, 20.1772, 1),
    light(5, 11, 8.6677, 3),
    light(6, 11, 10.6494, 3),
    light(7, 11, 24.30, 1),
    light(4, 12, 25.077, 0),
    light(5, 12, 13.3689, 2),
    light(6, 12, 0.0, 0),
    light(7, 12, 17.3381, 2),
    light(5, 13, 16.5622, 3),
    light(6, 13, 3.1250, 1),
    light(7, 13, 5.3455, 1),
    light(8, 13, 23.115, 3),
    light(5, 14, 23.664, 4),
    light(6, 14, 3.0199, 0),
    light(7, 14, 2.8634, 2),
    light(8, 14, 8.0075, 0),
    light(6, 15, 9.8731, 1),
    light(7, 15, 0.1015, 1),
    light(8, 15, 2.8556, 1),
    light(9, 15, 16.57, 1),
    light(6, 16, 13.694, 0),
    light(7, 16, 5.6839, 4),
    light(8, 16, -4.7370, 0),
    light(9, 16, 10.68, 0),
    light(6, 17, 21.032, 3),
    light(7, 17, 7.870, 1),
    light(8, 17, -0.8087, 5),
    light(9, 17, 1.9517, 5),
    light(10, 17, 16.50, 1),
    light(7, 18, 13.117, 2),
    light(8, 18, -0.7828, 0),
    light(9, 18, 0.8731, 2),
    light(10, 18, 5.3174, 0),
    light(7, 19, 15.86, 1),
    light(8, 19, 3.3329, 5),
    light(9, 19, -1.4874, 1),
    light(10, 19, 1.7520, 1),
    light(8, 20, 3.7966, 0),
    light(9, 20, -0.0174, 4),
    light(10, 20, -7.0419, 0),
    light(11, 20, 6.850, 4),
];

/// Light nuclides keyed by `(Z, A)`.
pub static LIGHT_NUCLIDE_INDEX: Lazy<HashMap<(i32, i32), LightNuclide>> = Lazy::new(|| {
    LIGHT_NUCLIDES
        .iter()
        .map(|nuclide| ((nuclide.z, nuclide.a), *nuclide))
        .collect()
});

/// Heaviest mass number covered by [`LIGHT_NUCLIDES`].
pub const LIGHT_NUCLIDE_MAX_A: i32 = 20;
