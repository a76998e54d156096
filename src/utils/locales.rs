//! Language code table used by the `lang` rule and language pickers

use serde::Serialize;

/// A two-letter (ISO 639-1) primary language subtag and its English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageCode {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGE_CODES: &[LanguageCode] = &[
    LanguageCode { code: "aa", name: "Afar" },
    LanguageCode { code: "ab", name: "Abkhazian" },
    LanguageCode { code: "ae", name: "Avestan" },
    LanguageCode { code: "af", name: "Afrikaans" },
    LanguageCode { code: "ak", name: "Akan" },
    LanguageCode { code: "am", name: "Amharic" },
    LanguageCode { code: "an", name: "Aragonese" },
    LanguageCode { code: "ar", name: "Arabic" },
    LanguageCode { code: "as", name: "Assamese" },
    LanguageCode { code: "av", name: "Avaric" },
    LanguageCode { code: "ay", name: "Aymara" },
    LanguageCode { code: "az", name: "Azerbaijani" },
    LanguageCode { code: "ba", name: "Bashkir" },
    LanguageCode { code: "be", name: "Belarusian" },
    LanguageCode { code: "bg", name: "Bulgarian" },
    LanguageCode { code: "bi", name: "Bislama" },
    LanguageCode { code: "bm", name: "Bambara" },
    LanguageCode { code: "bn", name: "Bengali" },
    LanguageCode { code: "bo", name: "Tibetan" },
    LanguageCode { code: "br", name: "Breton" },
    LanguageCode { code: "bs", name: "Bosnian" },
    LanguageCode { code: "ca", name: "Catalan" },
    LanguageCode { code: "ce", name: "Chechen" },
    LanguageCode { code: "ch", name: "Chamorro" },
    LanguageCode { code: "co", name: "Corsican" },
    LanguageCode { code: "cr", name: "Cree" },
    LanguageCode { code: "cs", name: "Czech" },
    LanguageCode { code: "cu", name: "Church Slavic" },
    LanguageCode { code: "cv", name: "Chuvash" },
    LanguageCode { code: "cy", name: "Welsh" },
    LanguageCode { code: "da", name: "Danish" },
    LanguageCode { code: "de", name: "German" },
    LanguageCode { code: "dv", name: "Divehi" },
    LanguageCode { code: "dz", name: "Dzongkha" },
    LanguageCode { code: "ee", name: "Ewe" },
    LanguageCode { code: "el", name: "Greek" },
    LanguageCode { code: "en", name: "English" },
    LanguageCode { code: "eo", name: "Esperanto" },
    LanguageCode { code: "es", name: "Spanish" },
    LanguageCode { code: "et", name: "Estonian" },
    LanguageCode { code: "eu", name: "Basque" },
    LanguageCode { code: "fa", name: "Persian" },
    LanguageCode { code: "ff", name: "Fulah" },
    LanguageCode { code: "fi", name: "Finnish" },
    LanguageCode { code: "fj", name: "Fijian" },
    LanguageCode { code: "fo", name: "Faroese" },
    LanguageCode { code: "fr", name: "French" },
    LanguageCode { code: "fy", name: "Western Frisian" },
    LanguageCode { code: "ga", name: "Irish" },
    LanguageCode { code: "gd", name: "Scottish Gaelic" },
    LanguageCode { code: "gl", name: "Galician" },
    LanguageCode { code: "gn", name: "Guarani" },
    LanguageCode { code: "gu", name: "Gujarati" },
    LanguageCode { code: "gv", name: "Manx" },
    LanguageCode { code: "ha", name: "Hausa" },
    LanguageCode { code: "he", name: "Hebrew" },
    LanguageCode { code: "hi", name: "Hindi" },
    LanguageCode { code: "ho", name: "Hiri Motu" },
    LanguageCode { code: "hr", name: "Croatian" },
    LanguageCode { code: "ht", name: "Haitian" },
    LanguageCode { code: "hu", name: "Hungarian" },
    LanguageCode { code: "hy", name: "Armenian" },
    LanguageCode { code: "hz", name: "Herero" },
    LanguageCode { code: "ia", name: "Interlingua" },
    LanguageCode { code: "id", name: "Indonesian" },
    LanguageCode { code: "ie", name: "Interlingue" },
    LanguageCode { code: "ig", name: "Igbo" },
    LanguageCode { code: "ii", name: "Sichuan Yi" },
    LanguageCode { code: "ik", name: "Inupiaq" },
    LanguageCode { code: "io", name: "Ido" },
    LanguageCode { code: "is", name: "Icelandic" },
    LanguageCode { code: "it", name: "Italian" },
    LanguageCode { code: "iu", name: "Inuktitut" },
    LanguageCode { code: "ja", name: "Japanese" },
    LanguageCode { code: "jv", name: "Javanese" },
    LanguageCode { code: "ka", name: "Georgian" },
    LanguageCode { code: "kg", name: "Kongo" },
    LanguageCode { code: "ki", name: "Kikuyu" },
    LanguageCode { code: "kj", name: "Kuanyama" },
    LanguageCode { code: "kk", name: "Kazakh" },
    LanguageCode { code: "kl", name: "Kalaallisut" },
    LanguageCode { code: "km", name: "Khmer" },
    LanguageCode { code: "kn", name: "Kannada" },
    LanguageCode { code: "ko", name: "Korean" },
    LanguageCode { code: "kr", name: "Kanuri" },
    LanguageCode { code: "ks", name: "Kashmiri" },
    LanguageCode { code: "ku", name: "Kurdish" },
    LanguageCode { code: "kv", name: "Komi" },
    LanguageCode { code: "kw", name: "Cornish" },
    LanguageCode { code: "ky", name: "Kyrgyz" },
    LanguageCode { code: "la", name: "Latin" },
    LanguageCode { code: "lb", name: "Luxembourgish" },
    LanguageCode { code: "lg", name: "Ganda" },
    LanguageCode { code: "li", name: "Limburgish" },
    LanguageCode { code: "ln", name: "Lingala" },
    LanguageCode { code: "lo", name: "Lao" },
    LanguageCode { code: "lt", name: "Lithuanian" },
    LanguageCode { code: "lu", name: "Luba-Katanga" },
    LanguageCode { code: "lv", name: "Latvian" },
    LanguageCode { code: "mg", name: "Malagasy" },
    LanguageCode { code: "mh", name: "Marshallese" },
    LanguageCode { code: "mi", name: "Maori" },
    LanguageCode { code: "mk", name: "Macedonian" },
    LanguageCode { code: "ml", name: "Malayalam" },
    LanguageCode { code: "mn", name: "Mongolian" },
    LanguageCode { code: "mr", name: "Marathi" },
    LanguageCode { code: "ms", name: "Malay" },
    LanguageCode { code: "mt", name: "Maltese" },
    LanguageCode { code: "my", name: "Burmese" },
    LanguageCode { code: "na", name: "Nauru" },
    LanguageCode { code: "nb", name: "Norwegian Bokmal" },
    LanguageCode { code: "nd", name: "North Ndebele" },
    LanguageCode { code: "ne", name: "Nepali" },
    LanguageCode { code: "ng", name: "Ndonga" },
    LanguageCode { code: "nl", name: "Dutch" },
    LanguageCode { code: "nn", name: "Norwegian Nynorsk" },
    LanguageCode { code: "no", name: "Norwegian" },
    LanguageCode { code: "nr", name: "South Ndebele" },
    LanguageCode { code: "nv", name: "Navajo" },
    LanguageCode { code: "ny", name: "Chichewa" },
    LanguageCode { code: "oc", name: "Occitan" },
    LanguageCode { code: "oj", name: "Ojibwa" },
    LanguageCode { code: "om", name: "Oromo" },
    LanguageCode { code: "or", name: "Oriya" },
    LanguageCode { code: "os", name: "Ossetian" },
    LanguageCode { code: "pa", name: "Punjabi" },
    LanguageCode { code: "pi", name: "Pali" },
    LanguageCode { code: "pl", name: "Polish" },
    LanguageCode { code: "ps", name: "Pashto" },
    LanguageCode { code: "pt", name: "Portuguese" },
    LanguageCode { code: "qu", name: "Quechua" },
    LanguageCode { code: "rm", name: "Romansh" },
    LanguageCode { code: "rn", name: "Rundi" },
    LanguageCode { code: "ro", name: "Romanian" },
    LanguageCode { code: "ru", name: "Russian" },
    LanguageCode { code: "rw", name: "Kinyarwanda" },
    LanguageCode { code: "sa", name: "Sanskrit" },
    LanguageCode { code: "sc", name: "Sardinian" },
    LanguageCode { code: "sd", name: "Sindhi" },
    LanguageCode { code: "se", name: "Northern Sami" },
    LanguageCode { code: "sg", name: "Sango" },
    LanguageCode { code: "si", name: "Sinhala" },
    LanguageCode { code: "sk", name: "Slovak" },
    LanguageCode { code: "sl", name: "Slovenian" },
    LanguageCode { code: "sm", name: "Samoan" },
    LanguageCode { code: "sn", name: "Shona" },
    LanguageCode { code: "so", name: "Somali" },
    LanguageCode { code: "sq", name: "Albanian" },
    LanguageCode { code: "sr", name: "Serbian" },
    LanguageCode { code: "ss", name: "Swati" },
    LanguageCode { code: "st", name: "Southern Sotho" },
    LanguageCode { code: "su", name: "Sundanese" },
    LanguageCode { code: "sv", name: "Swedish" },
    LanguageCode { code: "sw", name: "Swahili" },
    LanguageCode { code: "ta", name: "Tamil" },
    LanguageCode { code: "te", name: "Telugu" },
    LanguageCode { code: "tg", name: "Tajik" },
    LanguageCode { code: "th", name: "Thai" },
    LanguageCode { code: "ti", name: "Tigrinya" },
    LanguageCode { code: "tk", name: "Turkmen" },
    LanguageCode { code: "tl", name: "Tagalog" },
    LanguageCode { code: "tn", name: "Tswana" },
    LanguageCode { code: "to", name: "Tonga" },
    LanguageCode { code: "tr", name: "Turkish" },
    LanguageCode { code: "ts", name: "Tsonga" },
    LanguageCode { code: "tt", name: "Tatar" },
    LanguageCode { code: "tw", name: "Twi" },
    LanguageCode { code: "ty", name: "Tahitian" },
    LanguageCode { code: "ug", name: "Uyghur" },
    LanguageCode { code: "uk", name: "Ukrainian" },
    LanguageCode { code: "ur", name: "Urdu" },
    LanguageCode { code: "uz", name: "Uzbek" },
    LanguageCode { code: "ve", name: "Venda" },
    LanguageCode { code: "vi", name: "Vietnamese" },
    LanguageCode { code: "vo", name: "Volapuk" },
    LanguageCode { code: "wa", name: "Walloon" },
    LanguageCode { code: "wo", name: "Wolof" },
    LanguageCode { code: "xh", name: "Xhosa" },
    LanguageCode { code: "yi", name: "Yiddish" },
    LanguageCode { code: "yo", name: "Yoruba" },
    LanguageCode { code: "za", name: "Zhuang" },
    LanguageCode { code: "zh", name: "Chinese" },
    LanguageCode { code: "zu", name: "Zulu" },
];

/// True if the primary subtag of `code` is a known language.
///
/// `en`, `en-US` and `zh-Hant-TW` pass; further subtags only need to be 1-8
/// alphanumerics. Matching is case-insensitive. `en_US` fails.
pub fn is_valid_language_code(code: &str) -> bool {
    let mut subtags = code.split('-');
    let primary = subtags.next().unwrap_or_default();

    language_name(primary).is_some()
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// English name for a primary language subtag
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_CODES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .map(|lang| lang.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(LANGUAGE_CODES.windows(2).all(|w| w[0].code < w[1].code));
        assert!(LANGUAGE_CODES.iter().all(|l| l.code.len() == 2));
    }

    #[test]
    fn accepts_known_languages_with_subtags() {
        for code in ["en", "EN", "en-US", "pt-BR", "zh-Hant-TW", "fr-CA"] {
            assert!(is_valid_language_code(code), "{code}");
        }
    }

    #[test]
    fn rejects_unknown_or_malformed_codes() {
        for code in ["", "xx", "english", "en_US", "en-", "en-toolongsubtag", "-en"] {
            assert!(!is_valid_language_code(code), "{code}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(language_name("de"), Some("German"));
        assert_eq!(language_name("qq"), None);
    }
}
