//! Static ISO 3166-1 reference table.
//!
//! Supplies alpha-2, alpha-3, numeric, and display name for every
//! assigned country so identifiers from the boundary and visa datasets
//! resolve even for countries without curated climate records.

/// One ISO 3166-1 country assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCountry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
    pub name: &'static str,
}

const fn iso(
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: u16,
    name: &'static str,
) -> IsoCountry {
    IsoCountry {
        alpha2,
        alpha3,
        numeric,
        name,
    }
}

/// All ISO 3166-1 assignments.
pub static ISO_COUNTRIES: &[IsoCountry] = &[
    iso("AF", "AFG", 4, "Afghanistan"),
    iso("AX", "ALA", 248, "Aland Islands"),
    iso("AL", "ALB", 8, "Albania"),
    iso("DZ", "DZA", 12, "Algeria"),
    iso("AS", "ASM", 16, "American Samoa"),
    iso("AD", "AND", 20, "Andorra"),
    iso("AO", "AGO", 24, "Angola"),
    iso("AI", "AIA", 660, "Anguilla"),
    iso("AQ", "ATA", 10, "Antarctica"),
    iso("AG", "ATG", 28, "Antigua and Barbuda"),
    iso("AR", "ARG", 32, "Argentina"),
    iso("AM", "ARM", 51, "Armenia"),
    iso("AW", "ABW", 533, "Aruba"),
    iso("AU", "AUS", 36, "Australia"),
    iso("AT", "AUT", 40, "Austria"),
    iso("AZ", "AZE", 31, "Azerbaijan"),
    iso("BS", "BHS", 44, "Bahamas"),
    iso("BH", "BHR", 48, "Bahrain"),
    iso("BD", "BGD", 50, "Bangladesh"),
    iso("BB", "BRB", 52, "Barbados"),
    iso("BY", "BLR", 112, "Belarus"),
    iso("BE", "BEL", 56, "Belgium"),
    iso("BZ", "BLZ", 84, "Belize"),
    iso("BJ", "BEN", 204, "Benin"),
    iso("BM", "BMU", 60, "Bermuda"),
    iso("BT", "BTN", 64, "Bhutan"),
    iso("BO", "BOL", 68, "Bolivia"),
    iso("BQ", "BES", 535, "Caribbean Netherlands"),
    iso("BA", "BIH", 70, "Bosnia and Herzegovina"),
    iso("BW", "BWA", 72, "Botswana"),
    iso("BV", "BVT", 74, "Bouvet Island"),
    iso("BR", "BRA", 76, "Brazil"),
    iso("IO", "IOT", 86, "British Indian Ocean Territory"),
    iso("BN", "BRN", 96, "Brunei"),
    iso("BG", "BGR", 100, "Bulgaria"),
    iso("BF", "BFA", 854, "Burkina Faso"),
    iso("BI", "BDI", 108, "Burundi"),
    iso("CV", "CPV", 132, "Cape Verde"),
    iso("KH", "KHM", 116, "Cambodia"),
    iso("CM", "CMR", 120, "Cameroon"),
    iso("CA", "CAN", 124, "Canada"),
    iso("KY", "CYM", 136, "Cayman Islands"),
    iso("CF", "CAF", 140, "Central African Republic"),
    iso("TD", "TCD", 148, "Chad"),
    iso("CL", "CHL", 152, "Chile"),
    iso("CN", "CHN", 156, "China"),
    iso("CX", "CXR", 162, "Christmas Island"),
    iso("CC", "CCK", 166, "Cocos Islands"),
    iso("CO", "COL", 170, "Colombia"),
    iso("KM", "COM", 174, "Comoros"),
    iso("CG", "COG", 178, "Congo"),
    iso("CD", "COD", 180, "DR Congo"),
    iso("CK", "COK", 184, "Cook Islands"),
    iso("CR", "CRI", 188, "Costa Rica"),
    iso("CI", "CIV", 384, "Ivory Coast"),
    iso("HR", "HRV", 191, "Croatia"),
    iso("CU", "CUB", 192, "Cuba"),
    iso("CW", "CUW", 531, "Curacao"),
    iso("CY", "CYP", 196, "Cyprus"),
    iso("CZ", "CZE", 203, "Czech Republic"),
    iso("DK", "DNK", 208, "Denmark"),
    iso("DJ", "DJI", 262, "Djibouti"),
    iso("DM", "DMA", 212, "Dominica"),
    iso("DO", "DOM", 214, "Dominican Republic"),
    iso("EC", "ECU", 218, "Ecuador"),
    iso("EG", "EGY", 818, "Egypt"),
    iso("SV", "SLV", 222, "El Salvador"),
    iso("GQ", "GNQ", 226, "Equatorial Guinea"),
    iso("ER", "ERI", 232, "Eritrea"),
    iso("EE", "EST", 233, "Estonia"),
    iso("SZ", "SWZ", 748, "Eswatini"),
    iso("ET", "ETH", 231, "Ethiopia"),
    iso("FK", "FLK", 238, "Falkland Islands"),
    iso("FO", "FRO", 234, "Faroe Islands"),
    iso("FJ", "FJI", 242, "Fiji"),
    iso("FI", "FIN", 246, "Finland"),
    iso("FR", "FRA", 250, "France"),
    iso("GF", "GUF", 254, "French Guiana"),
    iso("PF", "PYF", 258, "French Polynesia"),
    iso("TF", "ATF", 260, "French Southern Territories"),
    iso("GA", "GAB", 266, "Gabon"),
    iso("GM", "GMB", 270, "Gambia"),
    iso("GE", "GEO", 268, "Georgia"),
    iso("DE", "DEU", 276, "Germany"),
    iso("GH", "GHA", 288, "Ghana"),
    iso("GI", "GIB", 292, "Gibraltar"),
    iso("GR", "GRC", 300, "Greece"),
    iso("GL", "GRL", 304, "Greenland"),
    iso("GD", "GRD", 308, "Grenada"),
    iso("GP", "GLP", 312, "Guadeloupe"),
    iso("GU", "GUM", 316, "Guam"),
    iso("GT", "GTM", 320, "Guatemala"),
    iso("GG", "GGY", 831, "Guernsey"),
    iso("GN", "GIN", 324, "Guinea"),
    iso("GW", "GNB", 624, "Guinea-Bissau"),
    iso("GY", "GUY", 328, "Guyana"),
    iso("HT", "HTI", 332, "Haiti"),
    iso("HM", "HMD", 334, "Heard Island and McDonald Islands"),
    iso("VA", "VAT", 336, "Vatican City"),
    iso("HN", "HND", 340, "Honduras"),
    iso("HK", "HKG", 344, "Hong Kong"),
    iso("HU", "HUN", 348, "Hungary"),
    iso("IS", "ISL", 352, "Iceland"),
    iso("IN", "IND", 356, "India"),
    iso("ID", "IDN", 360, "Indonesia"),
    iso("IR", "IRN", 364, "Iran"),
    iso("IQ", "IRQ", 368, "Iraq"),
    iso("IE", "IRL", 372, "Ireland"),
    iso("IM", "IMN", 833, "Isle of Man"),
    iso("IL", "ISR", 376, "Israel"),
    iso("IT", "ITA", 380, "Italy"),
    iso("JM", "JAM", 388, "Jamaica"),
    iso("JP", "JPN", 392, "Japan"),
    iso("JE", "JEY", 832, "Jersey"),
    iso("JO", "JOR", 400, "Jordan"),
    iso("KZ", "KAZ", 398, "Kazakhstan"),
    iso("KE", "KEN", 404, "Kenya"),
    iso("KI", "KIR", 296, "Kiribati"),
    iso("KP", "PRK", 408, "North Korea"),
    iso("KR", "KOR", 410, "South Korea"),
    iso("KW", "KWT", 414, "Kuwait"),
    iso("KG", "KGZ", 417, "Kyrgyzstan"),
    iso("LA", "LAO", 418, "Laos"),
    iso("LV", "LVA", 428, "Latvia"),
    iso("LB", "LBN", 422, "Lebanon"),
    iso("LS", "LSO", 426, "Lesotho"),
    iso("LR", "LBR", 430, "Liberia"),
    iso("LY", "LBY", 434, "Libya"),
    iso("LI", "LIE", 438, "Liechtenstein"),
    iso("LT", "LTU", 440, "Lithuania"),
    iso("LU", "LUX", 442, "Luxembourg"),
    iso("MO", "MAC", 446, "Macao"),
    iso("MG", "MDG", 450, "Madagascar"),
    iso("MW", "MWI", 454, "Malawi"),
    iso("MY", "MYS", 458, "Malaysia"),
    iso("MV", "MDV", 462, "Maldives"),
    iso("ML", "MLI", 466, "Mali"),
    iso("MT", "MLT", 470, "Malta"),
    iso("MH", "MHL", 584, "Marshall Islands"),
    iso("MQ", "MTQ", 474, "Martinique"),
    iso("MR", "MRT", 478, "Mauritania"),
    iso("MU", "MUS", 480, "Mauritius"),
    iso("YT", "MYT", 175, "Mayotte"),
    iso("MX", "MEX", 484, "Mexico"),
    iso("FM", "FSM", 583, "Micronesia"),
    iso("MD", "MDA", 498, "Moldova"),
    iso("MC", "MCO", 492, "Monaco"),
    iso("MN", "MNG", 496, "Mongolia"),
    iso("ME", "MNE", 499, "Montenegro"),
    iso("MS", "MSR", 500, "Montserrat"),
    iso("MA", "MAR", 504, "Morocco"),
    iso("MZ", "MOZ", 508, "Mozambique"),
    iso("MM", "MMR", 104, "Myanmar"),
    iso("NA", "NAM", 516, "Namibia"),
    iso("NR", "NRU", 520, "Nauru"),
    iso("NP", "NPL", 524, "Nepal"),
    iso("NL", "NLD", 528, "Netherlands"),
    iso("NC", "NCL", 540, "New Caledonia"),
    iso("NZ", "NZL", 554, "New Zealand"),
    iso("NI", "NIC", 558, "Nicaragua"),
    iso("NE", "NER", 562, "Niger"),
    iso("NG", "NGA", 566, "Nigeria"),
    iso("NU", "NIU", 570, "Niue"),
    iso("NF", "NFK", 574, "Norfolk Island"),
    iso("MK", "MKD", 807, "North Macedonia"),
    iso("MP", "MNP", 580, "Northern Mariana Islands"),
    iso("NO", "NOR", 578, "Norway"),
    iso("OM", "OMN", 512, "Oman"),
    iso("PK", "PAK", 586, "Pakistan"),
    iso("PW", "PLW", 585, "Palau"),
    iso("PS", "PSE", 275, "Palestine"),
    iso("PA", "PAN", 591, "Panama"),
    iso("PG", "PNG", 598, "Papua New Guinea"),
    iso("PY", "PRY", 600, "Paraguay"),
    iso("PE", "PER", 604, "Peru"),
    iso("PH", "PHL", 608, "Philippines"),
    iso("PN", "PCN", 612, "Pitcairn Islands"),
    iso("PL", "POL", 616, "Poland"),
    iso("PT", "PRT", 620, "Portugal"),
    iso("PR", "PRI", 630, "Puerto Rico"),
    iso("QA", "QAT", 634, "Qatar"),
    iso("RE", "REU", 638, "Reunion"),
    iso("RO", "ROU", 642, "Romania"),
    iso("RU", "RUS", 643, "Russia"),
    iso("RW", "RWA", 646, "Rwanda"),
    iso("BL", "BLM", 652, "Saint Barthelemy"),
    iso("SH", "SHN", 654, "Saint Helena"),
    iso("KN", "KNA", 659, "Saint Kitts and Nevis"),
    iso("LC", "LCA", 662, "Saint Lucia"),
    iso("MF", "MAF", 663, "Saint Martin"),
    iso("PM", "SPM", 666, "Saint Pierre and Miquelon"),
    iso("VC", "VCT", 670, "Saint Vincent and the Grenadines"),
    iso("WS", "WSM", 882, "Samoa"),
    iso("SM", "SMR", 674, "San Marino"),
    iso("ST", "STP", 678, "Sao Tome and Principe"),
    iso("SA", "SAU", 682, "Saudi Arabia"),
    iso("SN", "SEN", 686, "Senegal"),
    iso("RS", "SRB", 688, "Serbia"),
    iso("SC", "SYC", 690, "Seychelles"),
    iso("SL", "SLE", 694, "Sierra Leone"),
    iso("SG", "SGP", 702, "Singapore"),
    iso("SX", "SXM", 534, "Sint Maarten"),
    iso("SK", "SVK", 703, "Slovakia"),
    iso("SI", "SVN", 705, "Slovenia"),
    iso("SB", "SLB", 90, "Solomon Islands"),
    iso("SO", "SOM", 706, "Somalia"),
    iso("ZA", "ZAF", 710, "South Africa"),
    iso("GS", "SGS", 239, "South Georgia and the South Sandwich Islands"),
    iso("SS", "SSD", 728, "South Sudan"),
    iso("ES", "ESP", 724, "Spain"),
    iso("LK", "LKA", 144, "Sri Lanka"),
    iso("SD", "SDN", 729, "Sudan"),
    iso("SR", "SUR", 740, "Suriname"),
    iso("SJ", "SJM", 744, "Svalbard and Jan Mayen"),
    iso("SE", "SWE", 752, "Sweden"),
    iso("CH", "CHE", 756, "Switzerland"),
    iso("SY", "SYR", 760, "Syria"),
    iso("TW", "TWN", 158, "Taiwan"),
    iso("TJ", "TJK", 762, "Tajikistan"),
    iso("TZ", "TZA", 834, "Tanzania"),
    iso("TH", "THA", 764, "Thailand"),
    iso("TL", "TLS", 626, "Timor-Leste"),
    iso("TG", "TGO", 768, "Togo"),
    iso("TK", "TKL", 772, "Tokelau"),
    iso("TO", "TON", 776, "Tonga"),
    iso("TT", "TTO", 780, "Trinidad and Tobago"),
    iso("TN", "TUN", 788, "Tunisia"),
    iso("TR", "TUR", 792, "Turkey"),
    iso("TM", "TKM", 795, "Turkmenistan"),
    iso("TC", "TCA", 796, "Turks and Caicos Islands"),
    iso("TV", "TUV", 798, "Tuvalu"),
    iso("UG", "UGA", 800, "Uganda"),
    iso("UA", "UKR", 804, "Ukraine"),
    iso("AE", "ARE", 784, "United Arab Emirates"),
    iso("GB", "GBR", 826, "United Kingdom"),
    iso("US", "USA", 840, "United States"),
    iso("UM", "UMI", 581, "United States Minor Outlying Islands"),
    iso("UY", "URY", 858, "Uruguay"),
    iso("UZ", "UZB", 860, "Uzbekistan"),
    iso("VU", "VUT", 548, "Vanuatu"),
    iso("VE", "VEN", 862, "Venezuela"),
    iso("VN", "VNM", 704, "Vietnam"),
    iso("VG", "VGB", 92, "British Virgin Islands"),
    iso("VI", "VIR", 850, "U.S. Virgin Islands"),
    iso("WF", "WLF", 876, "Wallis and Futuna"),
    iso("EH", "ESH", 732, "Western Sahara"),
    iso("YE", "YEM", 887, "Yemen"),
    iso("ZM", "ZMB", 894, "Zambia"),
    iso("ZW", "ZWE", 716, "Zimbabwe"),
];

/// Alternate spellings found in boundary datasets, mapped to alpha-2.
///
/// Matching against these is exact and case-insensitive.
pub static NAME_ALIASES: &[(&str, &str)] = &[
    ("United States of America", "US"),
    ("USA", "US"),
    ("Russian Federation", "RU"),
    ("Czechia", "CZ"),
    ("Cote d'Ivoire", "CI"),
    ("Côte d'Ivoire", "CI"),
    ("Dem. Rep. Congo", "CD"),
    ("Democratic Republic of the Congo", "CD"),
    ("Republic of the Congo", "CG"),
    ("Central African Rep.", "CF"),
    ("S. Sudan", "SS"),
    ("Bosnia and Herz.", "BA"),
    ("Dominican Rep.", "DO"),
    ("Eq. Guinea", "GQ"),
    ("Solomon Is.", "SB"),
    ("Falkland Is.", "FK"),
    ("Fr. S. Antarctic Lands", "TF"),
    ("W. Sahara", "EH"),
    ("eSwatini", "SZ"),
    ("Swaziland", "SZ"),
    ("Macedonia", "MK"),
    ("East Timor", "TL"),
    ("Republic of Korea", "KR"),
    ("Korea", "KR"),
    ("Dem. Rep. Korea", "KP"),
    ("Lao PDR", "LA"),
    ("Viet Nam", "VN"),
    ("Burma", "MM"),
    ("Turkiye", "TR"),
    ("Türkiye", "TR"),
    ("Cabo Verde", "CV"),
    ("Holy See", "VA"),
    ("UK", "GB"),
    ("Great Britain", "GB"),
    ("UAE", "AE"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_codes_unique() {
        let mut alpha2 = HashSet::new();
        let mut alpha3 = HashSet::new();
        let mut numeric = HashSet::new();
        for c in ISO_COUNTRIES {
            assert!(alpha2.insert(c.alpha2), "duplicate alpha2 {}", c.alpha2);
            assert!(alpha3.insert(c.alpha3), "duplicate alpha3 {}", c.alpha3);
            assert!(numeric.insert(c.numeric), "duplicate numeric {}", c.numeric);
            assert_eq!(c.alpha2.len(), 2);
            assert_eq!(c.alpha3.len(), 3);
        }
    }

    #[test]
    fn test_aliases_point_into_table() {
        for (alias, code) in NAME_ALIASES {
            assert!(
                ISO_COUNTRIES.iter().any(|c| c.alpha2 == *code),
                "alias {} points at unknown code {}",
                alias,
                code
            );
        }
    }
}
