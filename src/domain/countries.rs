// Static board coordinates for every country on the map.
//
// Coordinates are in map-image pixels. `Panama` has no display name in the
// reference data and is kept that way.

/// Placement of one country marker on the board image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryMapEntry {
    pub id: &'static str,
    pub name: Option<&'static str>,
    pub x: i32,
    pub y: i32,
    pub opacity: f32,
}

const fn entry(
    id: &'static str,
    name: Option<&'static str>,
    x: i32,
    y: i32,
    opacity: f32,
) -> CountryMapEntry {
    CountryMapEntry {
        id,
        name,
        x,
        y,
        opacity,
    }
}

static COUNTRIES: [CountryMapEntry; 84] = [
    entry("Canada", Some("Canada"), 840, 750, 0.5),
    entry("UK", Some("UK"), 1688, 571, 0.5),
    entry("Norway", Some("Norway"), 1931, 277, 0.5),
    entry("Sweden", Some("Sweden"), 2232, 409, 0.5),
    entry("Finland", Some("Finland"), 2522, 286, 0.5),
    entry("Denmark", Some("Denmark"), 1980, 430, 0.5),
    entry("Benelux", Some("Benelux"), 1857, 726, 0.5),
    entry("France", Some("France"), 1819, 905, 0.5),
    entry("Spain_Portugal", Some("Spain_Portugal"), 1658, 1117, 0.5),
    entry("Italy", Some("Italy"), 2112, 1035, 0.5),
    entry("Greece", Some("Greece"), 2391, 1198, 0.5),
    entry("Austria", Some("Austria"), 2170, 879, 0.5),
    entry("West_Germany", Some("West_Germany"), 2076, 726, 0.5),
    entry("East_Germany", Some("East_Germany"), 2155, 577, 0.5),
    entry("Poland", Some("Poland"), 2385, 578, 0.5),
    entry("Czechoslovakia", Some("Czechoslovakia"), 2343, 725, 0.5),
    entry("Hungary", Some("Hungary"), 2391, 880, 0.5),
    entry("Yugoslavia", Some("Yugoslavia"), 2340, 1036, 0.5),
    entry("Romania", Some("Romania"), 2612, 880, 0.5),
    entry("Bulgaria", Some("Bulgaria"), 2568, 1036, 0.5),
    entry("Turkey", Some("Turkey"), 2787, 1055, 0.5),
    entry("Libya", Some("Libya"), 2292, 1488, 0.5),
    entry("Egypt", Some("Egypt"), 2517, 1510, 0.5),
    entry("Israel", Some("Israel"), 2621, 1355, 0.5),
    entry("Lebanon", Some("Lebanon"), 2659, 1205, 0.5),
    entry("Syria", Some("Syria"), 2875, 1203, 0.5),
    entry("Iraq", Some("Iraq"), 2873, 1353, 0.5),
    entry("Iran", Some("Iran"), 3088, 1355, 0.5),
    entry("Jordan", Some("Jordan"), 2764, 1507, 0.5),
    entry("Gulf_States", Some("Gulf_States"), 3012, 1503, 0.5),
    entry("Saudi_Arabia", Some("Saudi_Arabia"), 2951, 1653, 0.5),
    entry("Afghanistan", Some("Afghanistan"), 3346, 1255, 0.5),
    entry("Pakistan", Some("Pakistan"), 3350, 1450, 0.5),
    entry("India", Some("India"), 3591, 1552, 0.5),
    entry("Burma", Some("Burma"), 3861, 1582, 0.5),
    entry("Laos_Cambodia", Some("Laos_Cambodia"), 4075, 1604, 0.5),
    entry("Thailand", Some("Thailand"), 3984, 1759, 0.5),
    entry("Vietnam", Some("Vietnam"), 4205, 1760, 0.5),
    entry("Malaysia", Some("Malaysia"), 4085, 1992, 0.5),
    entry("Australia", Some("Australia"), 4452, 2442, 0.5),
    entry("Indonesia", Some("Indonesia"), 4448, 2177, 0.5),
    entry("Philippines", Some("Philippines"), 4530, 1756, 0.5),
    entry("Japan", Some("Japan"), 4705, 1346, 0.5),
    entry("Taiwan", Some("Taiwan"), 4435, 1525, 0.5),
    entry("South_Korea", Some("South_Korea"), 4530, 1203, 0.5),
    entry("North_Korea", Some("North_Korea"), 4485, 1051, 0.5),
    entry("Algeria", Some("Algeria"), 1937, 1331, 0.5),
    entry("Morocco", Some("Morocco"), 1716, 1399, 0.5),
    entry("Tunisia", Some("Tunisia"), 2164, 1313, 0.5),
    entry("West_African_States", Some("West_African_States"), 1695, 1595, 0.5),
    entry("Ivory_Coast", Some("Ivory_Coast"), 1837, 1884, 0.5),
    entry("Saharan_States", Some("Saharan_States"), 2027, 1649, 0.5),
    entry("Nigeria", Some("Nigeria"), 2112, 1861, 0.5),
    entry("Cameroon", Some("Cameroon"), 2211, 2036, 0.5),
    entry("Zaire", Some("Zaire"), 2473, 2108, 0.5),
    entry("Angola", Some("Angola"), 2281, 2290, 0.5),
    entry("South_Africa", Some("South_Africa"), 2373, 2689, 0.5),
    entry("Botswana", Some("Botswana"), 2477, 2522, 0.5),
    entry("Zimbabwe", Some("Zimbabwe"), 2548, 2364, 0.5),
    entry("SE_African_States", Some("SE_African_States"), 2765, 2250, 0.5),
    entry("Kenya", Some("Kenya"), 2736, 2045, 0.5),
    entry("Somalia", Some("Somalia"), 2956, 1912, 0.5),
    entry("Ethiopia", Some("Ethiopia"), 2711, 1846, 0.5),
    entry("Sudan", Some("Sudan"), 2555, 1690, 0.5),
    entry("Mexico", Some("Mexico"), 176, 1370, 0.5),
    entry("Guatemala", Some("Guatemala"), 366, 1526, 0.5),
    entry("El_Salvador", Some("El_Salvador"), 296, 1688, 0.5),
    entry("Honduras", Some("Honduras"), 518, 1676, 0.5),
    entry("Costa_Rica", Some("Costa_Rica"), 497, 1832, 0.5),
    entry("Panama", None, 743, 1827, 0.5),
    entry("Nicaragua", Some("Nicaragua"), 739, 1678, 0.5),
    entry("Cuba", Some("Cuba"), 752, 1481, 0.5),
    entry("Haiti", Some("Haiti"), 969, 1619, 0.5),
    entry("Dominican_Republic", Some("Dominican_Republic"), 1185, 1619, 0.5),
    entry("Colombia", Some("Colombia"), 884, 2010, 0.5),
    entry("Ecuador", Some("Ecuador"), 653, 2079, 0.5),
    entry("Peru", Some("Peru"), 778, 2246, 0.5),
    entry("Chile", Some("Chile"), 886, 2567, 0.5),
    entry("Argentina", Some("Argentina"), 961, 2859, 0.5),
    entry("Uruguay", Some("Uruguay"), 1204, 2739, 0.5),
    entry("Paraguay", Some("Paraguay"), 1135, 2550, 0.5),
    entry("Bolivia", Some("Bolivia"), 1007, 2384, 0.5),
    entry("Brazil", Some("Brazil"), 1389, 2232, 0.5),
    entry("Venezuela", Some("Venezuela"), 1005, 1849, 0.5),
];

/// All countries in board order.
pub fn countries() -> &'static [CountryMapEntry] {
    &COUNTRIES
}

/// Looks up a country by its identifier, e.g. `West_Germany`.
pub fn country(id: &str) -> Option<&'static CountryMapEntry> {
    COUNTRIES.iter().find(|entry| entry.id == id)
}
