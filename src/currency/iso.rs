//! The built-in ISO 4217 currency tables.
//!
//! Three lookup tables are carried: code to currency data, numeric code to
//! code, and country code to currency codes. They are regenerated offline
//! from the published ISO feed; at runtime they are immutable maps,
//! initialized once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::currency::provider::CurrencyProvider;
use crate::currency::{Currency, CurrencyData};
use crate::error::{Error, Result};

// (code, numeric code, name, default fraction digits)
const ISO_CURRENCIES: &[(&str, u16, &str, u32)] = &[
    ("AED", 784, "UAE Dirham", 2),
    ("AFN", 971, "Afghani", 2),
    ("ALL", 8, "Lek", 2),
    ("AMD", 51, "Armenian Dram", 2),
    ("ANG", 532, "Netherlands Antillean Guilder", 2),
    ("AOA", 973, "Kwanza", 2),
    ("ARS", 32, "Argentine Peso", 2),
    ("AUD", 36, "Australian Dollar", 2),
    ("AWG", 533, "Aruban Florin", 2),
    ("AZN", 944, "Azerbaijan Manat", 2),
    ("BAM", 977, "Convertible Mark", 2),
    ("BBD", 52, "Barbados Dollar", 2),
    ("BDT", 50, "Taka", 2),
    ("BGN", 975, "Bulgarian Lev", 2),
    ("BHD", 48, "Bahraini Dinar", 3),
    ("BIF", 108, "Burundi Franc", 0),
    ("BMD", 60, "Bermudian Dollar", 2),
    ("BND", 96, "Brunei Dollar", 2),
    ("BOB", 68, "Boliviano", 2),
    ("BRL", 986, "Brazilian Real", 2),
    ("BSD", 44, "Bahamian Dollar", 2),
    ("BTN", 64, "Ngultrum", 2),
    ("BWP", 72, "Pula", 2),
    ("BYN", 933, "Belarusian Ruble", 2),
    ("BZD", 84, "Belize Dollar", 2),
    ("CAD", 124, "Canadian Dollar", 2),
    ("CDF", 976, "Congolese Franc", 2),
    ("CHF", 756, "Swiss Franc", 2),
    ("CLP", 152, "Chilean Peso", 0),
    ("CNY", 156, "Yuan Renminbi", 2),
    ("COP", 170, "Colombian Peso", 2),
    ("CRC", 188, "Costa Rican Colon", 2),
    ("CUP", 192, "Cuban Peso", 2),
    ("CVE", 132, "Cabo Verde Escudo", 2),
    ("CZK", 203, "Czech Koruna", 2),
    ("DJF", 262, "Djibouti Franc", 0),
    ("DKK", 208, "Danish Krone", 2),
    ("DOP", 214, "Dominican Peso", 2),
    ("DZD", 12, "Algerian Dinar", 2),
    ("EGP", 818, "Egyptian Pound", 2),
    ("ETB", 230, "Ethiopian Birr", 2),
    ("EUR", 978, "Euro", 2),
    ("FJD", 242, "Fiji Dollar", 2),
    ("GBP", 826, "Pound Sterling", 2),
    ("GEL", 981, "Lari", 2),
    ("GHS", 936, "Ghana Cedi", 2),
    ("GMD", 270, "Dalasi", 2),
    ("GNF", 324, "Guinean Franc", 0),
    ("GTQ", 320, "Quetzal", 2),
    ("GYD", 328, "Guyana Dollar", 2),
    ("HKD", 344, "Hong Kong Dollar", 2),
    ("HNL", 340, "Lempira", 2),
    ("HTG", 332, "Gourde", 2),
    ("HUF", 348, "Forint", 2),
    ("IDR", 360, "Rupiah", 2),
    ("ILS", 376, "New Israeli Sheqel", 2),
    ("INR", 356, "Indian Rupee", 2),
    ("IQD", 368, "Iraqi Dinar", 3),
    ("IRR", 364, "Iranian Rial", 2),
    ("ISK", 352, "Iceland Krona", 0),
    ("JMD", 388, "Jamaican Dollar", 2),
    ("JOD", 400, "Jordanian Dinar", 3),
    ("JPY", 392, "Yen", 0),
    ("KES", 404, "Kenyan Shilling", 2),
    ("KGS", 417, "Som", 2),
    ("KHR", 116, "Riel", 2),
    ("KMF", 174, "Comorian Franc", 0),
    ("KRW", 410, "Won", 0),
    ("KWD", 414, "Kuwaiti Dinar", 3),
    ("KYD", 136, "Cayman Islands Dollar", 2),
    ("KZT", 398, "Tenge", 2),
    ("LAK", 418, "Lao Kip", 2),
    ("LBP", 422, "Lebanese Pound", 2),
    ("LKR", 144, "Sri Lanka Rupee", 2),
    ("LRD", 430, "Liberian Dollar", 2),
    ("LSL", 426, "Loti", 2),
    ("LYD", 434, "Libyan Dinar", 3),
    ("MAD", 504, "Moroccan Dirham", 2),
    ("MDL", 498, "Moldovan Leu", 2),
    ("MGA", 969, "Malagasy Ariary", 2),
    ("MKD", 807, "Denar", 2),
    ("MMK", 104, "Kyat", 2),
    ("MNT", 496, "Tugrik", 2),
    ("MOP", 446, "Pataca", 2),
    ("MRU", 929, "Ouguiya", 2),
    ("MUR", 480, "Mauritius Rupee", 2),
    ("MVR", 462, "Rufiyaa", 2),
    ("MWK", 454, "Malawi Kwacha", 2),
    ("MXN", 484, "Mexican Peso", 2),
    ("MYR", 458, "Malaysian Ringgit", 2),
    ("MZN", 943, "Mozambique Metical", 2),
    ("NAD", 516, "Namibia Dollar", 2),
    ("NGN", 566, "Naira", 2),
    ("NIO", 558, "Cordoba Oro", 2),
    ("NOK", 578, "Norwegian Krone", 2),
    ("NPR", 524, "Nepalese Rupee", 2),
    ("NZD", 554, "New Zealand Dollar", 2),
    ("OMR", 512, "Rial Omani", 3),
    ("PAB", 590, "Balboa", 2),
    ("PEN", 604, "Sol", 2),
    ("PGK", 598, "Kina", 2),
    ("PHP", 608, "Philippine Peso", 2),
    ("PKR", 586, "Pakistan Rupee", 2),
    ("PLN", 985, "Zloty", 2),
    ("PYG", 600, "Guarani", 0),
    ("QAR", 634, "Qatari Rial", 2),
    ("RON", 946, "Romanian Leu", 2),
    ("RSD", 941, "Serbian Dinar", 2),
    ("RUB", 643, "Russian Ruble", 2),
    ("RWF", 646, "Rwanda Franc", 0),
    ("SAR", 682, "Saudi Riyal", 2),
    ("SBD", 90, "Solomon Islands Dollar", 2),
    ("SCR", 690, "Seychelles Rupee", 2),
    ("SDG", 938, "Sudanese Pound", 2),
    ("SEK", 752, "Swedish Krona", 2),
    ("SGD", 702, "Singapore Dollar", 2),
    ("SLE", 925, "Leone", 2),
    ("SOS", 706, "Somali Shilling", 2),
    ("SRD", 968, "Surinam Dollar", 2),
    ("SSP", 728, "South Sudanese Pound", 2),
    ("STN", 930, "Dobra", 2),
    ("SYP", 760, "Syrian Pound", 2),
    ("SZL", 748, "Lilangeni", 2),
    ("THB", 764, "Baht", 2),
    ("TJS", 972, "Somoni", 2),
    ("TMT", 934, "Turkmenistan New Manat", 2),
    ("TND", 788, "Tunisian Dinar", 3),
    ("TOP", 776, "Pa'anga", 2),
    ("TRY", 949, "Turkish Lira", 2),
    ("TTD", 780, "Trinidad and Tobago Dollar", 2),
    ("TWD", 901, "New Taiwan Dollar", 2),
    ("TZS", 834, "Tanzanian Shilling", 2),
    ("UAH", 980, "Hryvnia", 2),
    ("UGX", 800, "Uganda Shilling", 0),
    ("USD", 840, "US Dollar", 2),
    ("UYU", 858, "Peso Uruguayo", 2),
    ("UZS", 860, "Uzbekistan Sum", 2),
    ("VES", 928, "Bolivar Soberano", 2),
    ("VND", 704, "Dong", 0),
    ("VUV", 548, "Vatu", 0),
    ("WST", 882, "Tala", 2),
    ("XAF", 950, "CFA Franc BEAC", 0),
    ("XCD", 951, "East Caribbean Dollar", 2),
    ("XOF", 952, "CFA Franc BCEAO", 0),
    ("XPF", 953, "CFP Franc", 0),
    ("YER", 886, "Yemeni Rial", 2),
    ("ZAR", 710, "Rand", 2),
    ("ZMW", 967, "Zambian Kwacha", 2),
    ("ZWL", 932, "Zimbabwe Dollar", 2),
];

// (ISO 3166 country code, currency codes in use)
const COUNTRY_CURRENCIES: &[(&str, &[&str])] = &[
    ("AE", &["AED"]),
    ("AR", &["ARS"]),
    ("AT", &["EUR"]),
    ("AU", &["AUD"]),
    ("BE", &["EUR"]),
    ("BG", &["BGN"]),
    ("BH", &["BHD"]),
    ("BR", &["BRL"]),
    ("CA", &["CAD"]),
    ("CH", &["CHF"]),
    ("CL", &["CLP"]),
    ("CN", &["CNY"]),
    ("CO", &["COP"]),
    ("CY", &["EUR"]),
    ("CZ", &["CZK"]),
    ("DE", &["EUR"]),
    ("DK", &["DKK"]),
    ("EE", &["EUR"]),
    ("EG", &["EGP"]),
    ("ES", &["EUR"]),
    ("FI", &["EUR"]),
    ("FR", &["EUR"]),
    ("GB", &["GBP"]),
    ("GR", &["EUR"]),
    ("HK", &["HKD"]),
    ("HT", &["HTG", "USD"]),
    ("HU", &["HUF"]),
    ("ID", &["IDR"]),
    ("IE", &["EUR"]),
    ("IL", &["ILS"]),
    ("IN", &["INR"]),
    ("IS", &["ISK"]),
    ("IT", &["EUR"]),
    ("JP", &["JPY"]),
    ("KE", &["KES"]),
    ("KR", &["KRW"]),
    ("KW", &["KWD"]),
    ("LI", &["CHF"]),
    ("LT", &["EUR"]),
    ("LU", &["EUR"]),
    ("LV", &["EUR"]),
    ("MA", &["MAD"]),
    ("MT", &["EUR"]),
    ("MX", &["MXN"]),
    ("MY", &["MYR"]),
    ("NG", &["NGN"]),
    ("NL", &["EUR"]),
    ("NO", &["NOK"]),
    ("NZ", &["NZD"]),
    ("OM", &["OMR"]),
    ("PA", &["PAB", "USD"]),
    ("PE", &["PEN"]),
    ("PH", &["PHP"]),
    ("PK", &["PKR"]),
    ("PL", &["PLN"]),
    ("PT", &["EUR"]),
    ("QA", &["QAR"]),
    ("RO", &["RON"]),
    ("RS", &["RSD"]),
    ("RU", &["RUB"]),
    ("SA", &["SAR"]),
    ("SE", &["SEK"]),
    ("SG", &["SGD"]),
    ("SI", &["EUR"]),
    ("SK", &["EUR"]),
    ("SV", &["USD"]),
    ("TH", &["THB"]),
    ("TR", &["TRY"]),
    ("TW", &["TWD"]),
    ("UA", &["UAH"]),
    ("US", &["USD"]),
    ("VN", &["VND"]),
    ("ZA", &["ZAR"]),
];

static CURRENCIES: Lazy<HashMap<&'static str, Currency>> = Lazy::new(|| {
    ISO_CURRENCIES
        .iter()
        .map(|&(code, numeric_code, name, default_fraction_digits)| {
            let data = CurrencyData {
                code: code.to_string(),
                numeric_code,
                name: name.to_string(),
                default_fraction_digits,
            };
            (code, Currency::from(data))
        })
        .collect()
});

static NUMERIC_INDEX: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    ISO_CURRENCIES
        .iter()
        .map(|&(code, numeric_code, _, _)| (numeric_code, code))
        .collect()
});

pub(crate) fn lookup(code: &str) -> Result<Currency> {
    CURRENCIES
        .get(code)
        .cloned()
        .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
}

pub(crate) fn lookup_numeric(numeric_code: u16) -> Result<Currency> {
    NUMERIC_INDEX
        .get(&numeric_code)
        .map(|code| CURRENCIES[code].clone())
        .ok_or_else(|| Error::UnknownCurrency(numeric_code.to_string()))
}

/// The provider backed by the built-in ISO 4217 table.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCurrencyProvider;

impl IsoCurrencyProvider {
    pub fn new() -> Self {
        IsoCurrencyProvider
    }

    /// Look up a currency by its ISO 4217 numeric code.
    pub fn currency_by_numeric(&self, numeric_code: u16) -> Result<Currency> {
        lookup_numeric(numeric_code)
    }

    /// The currencies in use in an ISO 3166 country, empty for countries
    /// the table does not cover.
    pub fn currencies_for_country(&self, country_code: &str) -> Vec<Currency> {
        COUNTRY_CURRENCIES
            .iter()
            .find(|(country, _)| *country == country_code)
            .map(|(_, codes)| codes.iter().map(|code| CURRENCIES[code].clone()).collect())
            .unwrap_or_default()
    }
}

impl CurrencyProvider for IsoCurrencyProvider {
    fn currency(&self, code: &str) -> Result<Currency> {
        lookup(code)
    }

    fn available_currencies(&self) -> HashMap<String, Currency> {
        CURRENCIES
            .iter()
            .map(|(&code, currency)| (code.to_string(), currency.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_index_matches_table() {
        for &(code, numeric_code, _, _) in ISO_CURRENCIES {
            assert_eq!(lookup_numeric(numeric_code).unwrap().code(), code);
        }
    }

    #[test]
    fn provider_resolves_codes() {
        let provider = IsoCurrencyProvider::new();
        assert_eq!(provider.currency("CHF").unwrap().name(), "Swiss Franc");
        assert_eq!(
            provider.currency("???"),
            Err(Error::UnknownCurrency("???".into()))
        );
        assert_eq!(provider.available_currencies().len(), ISO_CURRENCIES.len());
    }

    #[test]
    fn country_lookup() {
        let provider = IsoCurrencyProvider::new();
        let french = provider.currencies_for_country("FR");
        assert_eq!(french.len(), 1);
        assert_eq!(french[0].code(), "EUR");

        let panamanian = provider.currencies_for_country("PA");
        assert_eq!(panamanian.len(), 2);

        assert!(provider.currencies_for_country("ZZ").is_empty());
    }
}
