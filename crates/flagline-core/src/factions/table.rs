//! Built-in faction data: world nations rated by GDP (billions USD).

use crate::abilities::{Effect, TowerModifiers};

use super::Faction;

/// The one faction whose money bonus is a random multiplier.
pub const CASINO_FACTION_ID: &str = "mc";

struct Row(&'static str, &'static str, f64, &'static [u32]);

const RED: u32 = 0xCE1126;
const WHITE: u32 = 0xFFFFFF;
const BLUE: u32 = 0x0038A8;
const GREEN: u32 = 0x009A44;
const YELLOW: u32 = 0xFCD116;
const BLACK: u32 = 0x000000;
const SKY: u32 = 0x75AADB;
const NAVY: u32 = 0x012169;
const ORANGE: u32 = 0xFF9933;
const MAROON: u32 = 0x8D1B3D;

#[rustfmt::skip]
const ROWS: &[Row] = &[
    Row("tv", "Tuvalu", 0.06, &[SKY, YELLOW, NAVY]),
    Row("nr", "Nauru", 0.15, &[NAVY, YELLOW, WHITE]),
    Row("ki", "Kiribati", 0.22, &[RED, YELLOW, BLUE, WHITE]),
    Row("pw", "Palau", 0.23, &[SKY, YELLOW]),
    Row("mh", "Marshall Islands", 0.28, &[NAVY, ORANGE, WHITE]),
    Row("fm", "Micronesia", 0.43, &[SKY, WHITE]),
    Row("to", "Tonga", 0.50, &[RED, WHITE]),
    Row("st", "Sao Tome and Principe", 0.55, &[GREEN, YELLOW, RED, BLACK]),
    Row("dm", "Dominica", 0.61, &[GREEN, YELLOW, BLACK, RED]),
    Row("ws", "Samoa", 0.83, &[RED, NAVY, WHITE]),
    Row("vu", "Vanuatu", 0.98, &[RED, GREEN, BLACK, YELLOW]),
    Row("vc", "Saint Vincent", 1.00, &[BLUE, YELLOW, GREEN]),
    Row("kn", "Saint Kitts and Nevis", 1.05, &[GREEN, RED, BLACK, YELLOW]),
    Row("km", "Comoros", 1.24, &[YELLOW, WHITE, RED, BLUE]),
    Row("gd", "Grenada", 1.30, &[RED, YELLOW, GREEN]),
    Row("gw", "Guinea-Bissau", 1.60, &[RED, YELLOW, GREEN, BLACK]),
    Row("sb", "Solomon Islands", 1.60, &[BLUE, YELLOW, GREEN]),
    Row("ag", "Antigua and Barbuda", 1.70, &[RED, BLACK, SKY, YELLOW]),
    Row("sm", "San Marino", 1.80, &[WHITE, SKY]),
    Row("sc", "Seychelles", 2.00, &[BLUE, YELLOW, RED, GREEN]),
    Row("gm", "Gambia", 2.20, &[RED, BLUE, GREEN, WHITE]),
    Row("cv", "Cabo Verde", 2.20, &[BLUE, WHITE, RED, YELLOW]),
    Row("lc", "Saint Lucia", 2.30, &[SKY, YELLOW, BLACK, WHITE]),
    Row("ls", "Lesotho", 2.50, &[BLUE, WHITE, GREEN, BLACK]),
    Row("bz", "Belize", 2.80, &[BLUE, RED, WHITE]),
    Row("bt", "Bhutan", 2.90, &[YELLOW, ORANGE, WHITE]),
    Row("tl", "Timor-Leste", 3.20, &[RED, YELLOW, BLACK, WHITE]),
    Row("ad", "Andorra", 3.40, &[BLUE, YELLOW, RED]),
    Row("sr", "Suriname", 3.60, &[GREEN, WHITE, RED, YELLOW]),
    Row("dj", "Djibouti", 3.70, &[SKY, GREEN, WHITE, RED]),
    Row("lr", "Liberia", 4.00, &[RED, WHITE, NAVY]),
    Row("sz", "Eswatini", 4.80, &[BLUE, YELLOW, RED, BLACK]),
    Row("fj", "Fiji", 5.00, &[SKY, NAVY, RED, WHITE]),
    Row("bb", "Barbados", 5.60, &[NAVY, YELLOW, BLACK]),
    Row("mv", "Maldives", 6.20, &[RED, GREEN, WHITE]),
    Row("me", "Montenegro", 6.20, &[RED, YELLOW]),
    Row("bi", "Burundi", 3.10, &[RED, GREEN, WHITE]),
    Row("cf", "Central African Republic", 2.40, &[BLUE, WHITE, GREEN, YELLOW]),
    Row("li", "Liechtenstein", 7.00, &[NAVY, RED, YELLOW]),
    Row("er", "Eritrea", 2.30, &[GREEN, RED, SKY, YELLOW]),
    Row("mc", "Monaco", 8.60, &[RED, WHITE]),
    Row("sl", "Sierra Leone", 4.10, &[GREEN, WHITE, BLUE]),
    Row("mr", "Mauritania", 10.10, &[GREEN, YELLOW, RED]),
    Row("tg", "Togo", 8.10, &[GREEN, YELLOW, RED, WHITE]),
    Row("ht", "Haiti", 20.20, &[NAVY, RED, WHITE]),
    Row("mw", "Malawi", 13.20, &[BLACK, RED, GREEN]),
    Row("ne", "Niger", 15.10, &[ORANGE, WHITE, GREEN]),
    Row("td", "Chad", 12.70, &[NAVY, YELLOW, RED]),
    Row("kg", "Kyrgyzstan", 10.90, &[RED, YELLOW]),
    Row("tj", "Tajikistan", 10.50, &[RED, WHITE, GREEN, YELLOW]),
    Row("mu", "Mauritius", 13.00, &[RED, BLUE, YELLOW, GREEN]),
    Row("na", "Namibia", 12.60, &[BLUE, RED, GREEN, YELLOW]),
    Row("mk", "North Macedonia", 13.60, &[RED, YELLOW]),
    Row("md", "Moldova", 14.50, &[BLUE, YELLOW, RED]),
    Row("gy", "Guyana", 14.70, &[GREEN, YELLOW, RED, BLACK]),
    Row("bs", "Bahamas", 12.90, &[SKY, YELLOW, BLACK]),
    Row("gn", "Guinea", 21.20, &[RED, YELLOW, GREEN]),
    Row("mn", "Mongolia", 17.10, &[RED, BLUE, YELLOW]),
    Row("jm", "Jamaica", 17.10, &[GREEN, YELLOW, BLACK]),
    Row("mt", "Malta", 18.10, &[WHITE, RED]),
    Row("ml", "Mali", 19.00, &[GREEN, YELLOW, RED]),
    Row("al", "Albania", 18.90, &[RED, BLACK]),
    Row("bf", "Burkina Faso", 18.80, &[RED, GREEN, YELLOW]),
    Row("am", "Armenia", 19.50, &[RED, BLUE, ORANGE]),
    Row("bw", "Botswana", 20.40, &[SKY, BLACK, WHITE]),
    Row("bj", "Benin", 17.40, &[GREEN, YELLOW, RED]),
    Row("mz", "Mozambique", 17.90, &[GREEN, BLACK, YELLOW, RED]),
    Row("ga", "Gabon", 21.10, &[GREEN, YELLOW, BLUE]),
    Row("mg", "Madagascar", 15.10, &[WHITE, RED, GREEN]),
    Row("ps", "Palestine", 19.10, &[BLACK, WHITE, GREEN, RED]),
    Row("zw", "Zimbabwe", 20.70, &[GREEN, YELLOW, RED, BLACK]),
    Row("ba", "Bosnia and Herzegovina", 24.50, &[BLUE, YELLOW, WHITE]),
    Row("ge", "Georgia", 24.60, &[WHITE, RED]),
    Row("bh", "Bahrain", 44.40, &[RED, WHITE]),
    Row("is", "Iceland", 27.80, &[BLUE, WHITE, RED]),
    Row("cy", "Cyprus", 28.40, &[WHITE, ORANGE, GREEN]),
    Row("zm", "Zambia", 29.80, &[GREEN, RED, BLACK, ORANGE]),
    Row("kh", "Cambodia", 30.00, &[BLUE, RED, WHITE]),
    Row("sn", "Senegal", 27.70, &[GREEN, YELLOW, RED]),
    Row("hn", "Honduras", 31.70, &[BLUE, WHITE]),
    Row("sv", "El Salvador", 32.50, &[BLUE, WHITE]),
    Row("tt", "Trinidad and Tobago", 28.00, &[RED, WHITE, BLACK]),
    Row("pg", "Papua New Guinea", 31.70, &[RED, BLACK, YELLOW, WHITE]),
    Row("la", "Laos", 15.30, &[RED, BLUE, WHITE]),
    Row("ee", "Estonia", 38.10, &[BLUE, BLACK, WHITE]),
    Row("np", "Nepal", 40.80, &[RED, BLUE, WHITE]),
    Row("lv", "Latvia", 41.20, &[MAROON, WHITE]),
    Row("py", "Paraguay", 41.70, &[RED, WHITE, BLUE]),
    Row("cm", "Cameroon", 44.20, &[GREEN, RED, YELLOW]),
    Row("bo", "Bolivia", 44.00, &[RED, YELLOW, GREEN]),
    Row("ug", "Uganda", 45.60, &[BLACK, YELLOW, RED, WHITE]),
    Row("tn", "Tunisia", 46.60, &[RED, WHITE]),
    Row("jo", "Jordan", 48.00, &[BLACK, WHITE, GREEN, RED]),
    Row("lb", "Lebanon", 21.80, &[RED, WHITE, GREEN]),
    Row("af", "Afghanistan", 14.60, &[BLACK, RED, GREEN]),
    Row("ye", "Yemen", 21.60, &[RED, WHITE, BLACK]),
    Row("ss", "South Sudan", 6.00, &[BLACK, RED, GREEN, BLUE]),
    Row("sd", "Sudan", 51.70, &[RED, WHITE, BLACK, GREEN]),
    Row("ly", "Libya", 45.80, &[RED, BLACK, GREEN]),
    Row("tm", "Turkmenistan", 56.50, &[GREEN, WHITE, RED]),
    Row("mm", "Myanmar", 59.50, &[YELLOW, GREEN, RED, WHITE]),
    Row("rs", "Serbia", 63.50, &[RED, BLUE, WHITE]),
    Row("cd", "DR Congo", 64.70, &[SKY, YELLOW, RED]),
    Row("si", "Slovenia", 62.10, &[WHITE, BLUE, RED]),
    Row("cr", "Costa Rica", 68.40, &[BLUE, WHITE, RED]),
    Row("ci", "Cote d'Ivoire", 70.00, &[ORANGE, WHITE, GREEN]),
    Row("lt", "Lithuania", 70.30, &[YELLOW, GREEN, RED]),
    Row("uy", "Uruguay", 71.20, &[WHITE, BLUE, YELLOW]),
    Row("hr", "Croatia", 71.60, &[RED, WHITE, BLUE]),
    Row("by", "Belarus", 72.80, &[RED, GREEN, WHITE]),
    Row("gh", "Ghana", 72.80, &[RED, YELLOW, GREEN, BLACK]),
    Row("lk", "Sri Lanka", 74.40, &[MAROON, YELLOW, ORANGE, GREEN]),
    Row("tz", "Tanzania", 75.70, &[GREEN, YELLOW, BLACK, SKY]),
    Row("pa", "Panama", 76.50, &[WHITE, RED, BLUE]),
    Row("az", "Azerbaijan", 78.70, &[SKY, RED, GREEN]),
    Row("uz", "Uzbekistan", 80.40, &[SKY, WHITE, GREEN, RED]),
    Row("lu", "Luxembourg", 82.30, &[RED, WHITE, SKY]),
    Row("bg", "Bulgaria", 89.00, &[WHITE, GREEN, RED]),
    Row("ve", "Venezuela", 92.20, &[YELLOW, BLUE, RED]),
    Row("gt", "Guatemala", 95.00, &[SKY, WHITE]),
    Row("cu", "Cuba", 107.40, &[BLUE, WHITE, RED]),
    Row("ao", "Angola", 106.80, &[RED, BLACK, YELLOW]),
    Row("ke", "Kenya", 113.40, &[BLACK, RED, GREEN, WHITE]),
    Row("do", "Dominican Republic", 113.60, &[BLUE, RED, WHITE]),
    Row("om", "Oman", 114.70, &[RED, WHITE, GREEN]),
    Row("ec", "Ecuador", 115.00, &[YELLOW, BLUE, RED]),
    Row("sk", "Slovakia", 115.50, &[WHITE, BLUE, RED]),
    Row("et", "Ethiopia", 126.80, &[GREEN, YELLOW, RED, BLUE]),
    Row("ma", "Morocco", 134.20, &[RED, GREEN]),
    Row("ua", "Ukraine", 160.50, &[BLUE, YELLOW]),
    Row("hu", "Hungary", 178.80, &[RED, WHITE, GREEN]),
    Row("kw", "Kuwait", 184.60, &[GREEN, WHITE, RED, BLACK]),
    Row("dz", "Algeria", 195.00, &[GREEN, WHITE, RED]),
    Row("kz", "Kazakhstan", 220.60, &[SKY, YELLOW]),
    Row("gr", "Greece", 219.10, &[BLUE, WHITE]),
    Row("qa", "Qatar", 237.30, &[MAROON, WHITE]),
    Row("nz", "New Zealand", 247.20, &[NAVY, RED, WHITE]),
    Row("pt", "Portugal", 255.20, &[GREEN, RED, YELLOW]),
    Row("iq", "Iraq", 264.20, &[RED, WHITE, BLACK, GREEN]),
    Row("pe", "Peru", 242.60, &[RED, WHITE]),
    Row("fi", "Finland", 282.90, &[WHITE, BLUE]),
    Row("cz", "Czechia", 290.90, &[WHITE, RED, BLUE]),
    Row("ro", "Romania", 301.30, &[BLUE, YELLOW, RED]),
    Row("cl", "Chile", 301.00, &[BLUE, WHITE, RED]),
    Row("co", "Colombia", 343.90, &[YELLOW, BLUE, RED]),
    Row("pk", "Pakistan", 376.50, &[GREEN, WHITE]),
    Row("dk", "Denmark", 395.40, &[RED, WHITE]),
    Row("ph", "Philippines", 404.30, &[BLUE, RED, WHITE, YELLOW]),
    Row("za", "South Africa", 405.90, &[GREEN, YELLOW, BLACK, RED]),
    Row("my", "Malaysia", 406.30, &[RED, WHITE, NAVY, YELLOW]),
    Row("vn", "Vietnam", 408.80, &[RED, YELLOW]),
    Row("ir", "Iran", 413.50, &[GREEN, WHITE, RED]),
    Row("bd", "Bangladesh", 460.20, &[GREEN, RED]),
    Row("sg", "Singapore", 466.80, &[RED, WHITE]),
    Row("at", "Austria", 471.40, &[RED, WHITE]),
    Row("eg", "Egypt", 476.70, &[RED, WHITE, BLACK, YELLOW]),
    Row("ng", "Nigeria", 477.40, &[GREEN, WHITE]),
    Row("th", "Thailand", 495.30, &[RED, WHITE, NAVY]),
    Row("ae", "United Arab Emirates", 507.50, &[GREEN, WHITE, BLACK, RED]),
    Row("il", "Israel", 522.00, &[BLUE, WHITE]),
    Row("ie", "Ireland", 529.20, &[GREEN, WHITE, ORANGE]),
    Row("no", "Norway", 579.30, &[RED, WHITE, NAVY]),
    Row("be", "Belgium", 583.40, &[BLACK, YELLOW, RED]),
    Row("se", "Sweden", 585.90, &[BLUE, YELLOW]),
    Row("ar", "Argentina", 632.80, &[SKY, WHITE, YELLOW]),
    Row("pl", "Poland", 688.20, &[WHITE, RED]),
    Row("tw", "Taiwan", 761.70, &[RED, BLUE, WHITE]),
    Row("ch", "Switzerland", 807.70, &[RED, WHITE]),
    Row("tr", "Turkiye", 905.90, &[RED, WHITE]),
    Row("nl", "Netherlands", 991.10, &[RED, WHITE, BLUE]),
    Row("sa", "Saudi Arabia", 1_108.10, &[GREEN, WHITE]),
    Row("id", "Indonesia", 1_319.10, &[RED, WHITE]),
    Row("es", "Spain", 1_397.50, &[RED, YELLOW]),
    Row("mx", "Mexico", 1_414.20, &[GREEN, WHITE, RED]),
    Row("kr", "South Korea", 1_665.20, &[WHITE, RED, BLUE, BLACK]),
    Row("au", "Australia", 1_675.40, &[NAVY, WHITE, RED]),
    Row("br", "Brazil", 1_920.10, &[GREEN, YELLOW, BLUE, WHITE]),
    Row("it", "Italy", 2_010.40, &[GREEN, WHITE, RED]),
    Row("ca", "Canada", 2_140.00, &[RED, WHITE]),
    Row("ru", "Russia", 2_240.40, &[WHITE, BLUE, RED]),
    Row("fr", "France", 2_782.90, &[BLUE, WHITE, RED]),
    Row("gb", "United Kingdom", 3_070.70, &[NAVY, WHITE, RED]),
    Row("in", "India", 3_385.10, &[ORANGE, WHITE, GREEN, NAVY]),
    Row("de", "Germany", 4_072.20, &[BLACK, RED, YELLOW]),
    Row("jp", "Japan", 4_231.10, &[WHITE, RED]),
    Row("cn", "China", 17_963.20, &[RED, YELLOW]),
    Row("us", "United States", 25_462.70, &[RED, WHITE, NAVY]),
];

/// Per-attack effects for factions that declare any. Everything else
/// resolves to the identity outcome.
#[rustfmt::skip]
const ABILITIES: &[(&str, &[Effect])] = &[
    // Raw firepower.
    ("us", &[Effect::Damage { multiplier: 1.5 }]),
    ("cn", &[Effect::Multi { targets: 3 }]),
    ("ru", &[Effect::Splash { multiplier: 1.0 }, Effect::Slow { multiplier: 0.6, duration: 1.5 }]),
    ("de", &[Effect::Pierce { extra: 3 }]),
    ("jp", &[Effect::Critical { chance: 0.2, multiplier: 3.0 }]),
    ("in", &[Effect::Multi { targets: 4 }]),
    ("gb", &[Effect::Critical { chance: 0.2, multiplier: 2.5 }]),
    ("fr", &[Effect::Splash { multiplier: 0.8 }]),
    ("it", &[Effect::Damage { multiplier: 1.2 }, Effect::Money { multiplier: 0.2 }]),
    ("ca", &[Effect::Slow { multiplier: 0.5, duration: 2.0 }]),
    ("br", &[Effect::Multi { targets: 2 }, Effect::Money { multiplier: 0.1 }]),
    ("kr", &[Effect::Pierce { extra: 2 }, Effect::Damage { multiplier: 1.1 }]),
    ("au", &[Effect::Slow { multiplier: -0.5, duration: 0.5 }]),
    ("mx", &[Effect::Splash { multiplier: 0.7 }]),
    ("es", &[Effect::Critical { chance: 0.25, multiplier: 2.0 }]),
    ("id", &[Effect::Multi { targets: 3 }]),
    ("sa", &[Effect::Money { multiplier: 0.5 }]),
    ("nl", &[Effect::Slow { multiplier: 0.7, duration: 2.5 }]),
    ("tr", &[Effect::Pierce { extra: 2 }]),
    ("ch", &[Effect::Money { multiplier: 0.8 }, Effect::Shield { duration: 2.0 }]),
    ("tw", &[Effect::Critical { chance: 0.3, multiplier: 2.0 }]),
    ("pl", &[Effect::Damage { multiplier: 1.3 }]),
    ("se", &[Effect::Slow { multiplier: 0.4, duration: 1.0 }]),
    ("no", &[Effect::Slow { multiplier: 0.0, duration: 0.75 }]),
    ("il", &[Effect::Shield { duration: 3.0 }, Effect::Critical { chance: 0.15, multiplier: 3.0 }]),
    ("ae", &[Effect::Money { multiplier: 1.0 }]),
    ("sg", &[Effect::Money { multiplier: 0.6 }, Effect::Critical { chance: 0.1, multiplier: 2.0 }]),
    ("qa", &[Effect::Money { multiplier: 0.7 }]),
    ("kw", &[Effect::Money { multiplier: 0.6 }]),
    ("lu", &[Effect::Money { multiplier: 0.9 }]),
    ("li", &[Effect::Money { multiplier: 0.5 }]),
    (CASINO_FACTION_ID, &[Effect::Casino { min_multiplier: 0.0, max_multiplier: 3.0 }]),
    ("ar", &[Effect::Critical { chance: 0.2, multiplier: 2.2 }]),
    ("eg", &[Effect::Splash { multiplier: 0.6 }]),
    ("ng", &[Effect::Multi { targets: 2 }]),
    ("za", &[Effect::Pierce { extra: 1 }, Effect::Damage { multiplier: 1.1 }]),
    ("vn", &[Effect::Slow { multiplier: 0.5, duration: 1.5 }]),
    ("ph", &[Effect::Multi { targets: 2 }, Effect::Slow { multiplier: 0.8, duration: 1.0 }]),
    ("fi", &[Effect::Slow { multiplier: 0.0, duration: 0.5 }]),
    ("dk", &[Effect::Pierce { extra: 1 }]),
    ("gr", &[Effect::Splash { multiplier: 0.5 }]),
    ("pt", &[Effect::Multi { targets: 2 }]),
    ("nz", &[Effect::Slow { multiplier: -0.3, duration: 0.5 }]),
    ("ie", &[Effect::Critical { chance: 0.25, multiplier: 2.0 }]),
    ("is", &[Effect::Slow { multiplier: 0.3, duration: 1.5 }]),
    ("ua", &[Effect::Damage { multiplier: 1.4 }]),
    ("ke", &[Effect::Multi { targets: 2 }]),
    ("cu", &[Effect::Pierce { extra: 2 }]),
    ("kz", &[Effect::Splash { multiplier: 0.6 }]),
    ("mt", &[Effect::Shield { duration: 1.5 }]),
    ("tv", &[Effect::Damage { multiplier: 2.0 }]),
    ("nr", &[Effect::Money { multiplier: 0.3 }]),
    ("va", &[Effect::Shield { duration: 5.0 }]),
    ("bt", &[Effect::Slow { multiplier: 0.6, duration: 3.0 }]),
    ("jm", &[Effect::Multi { targets: 2 }, Effect::Critical { chance: 0.2, multiplier: 1.5 }]),
    ("ee", &[Effect::Critical { chance: 0.35, multiplier: 1.8 }]),
    ("cl", &[Effect::Pierce { extra: 1 }]),
    ("co", &[Effect::Money { multiplier: 0.3 }]),
    ("pe", &[Effect::Slow { multiplier: 0.7, duration: 2.0 }]),
    ("ma", &[Effect::Splash { multiplier: 0.5 }]),
];

/// Tower-level range/attack-interval modifiers.
#[rustfmt::skip]
const TOWER_MODIFIERS: &[(&str, TowerModifiers)] = &[
    ("us", TowerModifiers::new(1.2, 1.0)),
    ("ru", TowerModifiers::new(1.3, 1.2)),
    ("cn", TowerModifiers::new(1.0, 0.8)),
    ("jp", TowerModifiers::new(1.0, 0.9)),
    ("de", TowerModifiers::new(1.15, 1.0)),
    ("ca", TowerModifiers::new(1.25, 1.0)),
    ("au", TowerModifiers::new(1.4, 1.1)),
    ("kz", TowerModifiers::new(1.3, 1.0)),
    ("sg", TowerModifiers::new(0.8, 0.7)),
    ("mc", TowerModifiers::new(0.9, 1.0)),
    ("va", TowerModifiers::new(0.7, 1.5)),
    ("ee", TowerModifiers::new(1.0, 0.75)),
];

pub(super) fn builtin_factions() -> Vec<Faction> {
    let mut factions: Vec<Faction> = ROWS
        .iter()
        .map(|&Row(id, name, power, palette)| Faction::new(id, name, power).with_palette(palette))
        .collect();
    factions.push(Faction::new("va", "Vatican City", 0.04).with_palette(&[YELLOW, WHITE]));

    for faction in &mut factions {
        if let Some((_, effects)) = ABILITIES.iter().find(|(id, _)| *id == faction.id) {
            faction.abilities = effects.to_vec();
        }
        if let Some((_, modifiers)) = TOWER_MODIFIERS.iter().find(|(id, _)| *id == faction.id) {
            faction.tower_modifiers = *modifiers;
        }
    }
    factions
}
