use editor_core_chardet::{
    ASCII_NAME, CharsetProber, CjkEncoding, EscCharsetProber, InputState, LanguageFilter,
    Latin1Prober, MINIMUM_THRESHOLD, MbcsGroupProber, MultiByteProber, ProbingState,
    SingleByteModels, UniversalDetector, Utf8Prober, detect, lang_models,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// "これはテストです。日本語の文章を書いています。ひらがなとカタカナと漢字があります。" in Shift_JIS.
const SJIS_TEXT: &[u8] = b"\x82\xb1\x82\xea\x82\xcd\x83\x65\x83\x58\x83\x67\x82\xc5\x82\xb7\x81\x42\x93\xfa\x96\x7b\x8c\xea\x82\xcc\x95\xb6\x8f\xcd\x82\xf0\x8f\x91\x82\xa2\x82\xc4\x82\xa2\x82\xdc\x82\xb7\x81\x42\x82\xd0\x82\xe7\x82\xaa\x82\xc8\x82\xc6\x83\x4a\x83\x5e\x83\x4a\x83\x69\x82\xc6\x8a\xbf\x8e\x9a\x82\xaa\x82\xa0\x82\xe8\x82\xdc\x82\xb7\x81\x42";
// "안녕하세요. 이것은 한국어 문장입니다." in EUC-KR.
const EUC_KR_TEXT: &[u8] = b"\xbe\xc8\xb3\xe7\xc7\xcf\xbc\xbc\xbf\xe4. \xc0\xcc\xb0\xcd\xc0\xba \xc7\xd1\xb1\xb9\xbe\xee \xb9\xae\xc0\xe5\xc0\xd4\xb4\xcf\xb4\xd9.";
// "的是不了在人有我他这个们中来上大为和国地到以说时" in GB2312.
const GB2312_TEXT: &[u8] = b"\xb5\xc4\xca\xc7\xb2\xbb\xc1\xcb\xd4\xda\xc8\xcb\xd3\xd0\xce\xd2\xcb\xfb\xd5\xe2\xb8\xf6\xc3\xc7\xd6\xd0\xc0\xb4\xc9\xcf\xb4\xf3\xce\xaa\xba\xcd\xb9\xfa\xb5\xd8\xb5\xbd\xd2\xd4\xcb\xb5\xca\xb1";
// "これはテストです。日本語の文章を書いています。ひらがなとカタカナと漢字があります。" in EUC-JP.
const EUC_JP_TEXT: &[u8] = b"\xa4\xb3\xa4\xec\xa4\xcf\xa5\xc6\xa5\xb9\xa5\xc8\xa4\xc7\xa4\xb9\xa1\xa3\xc6\xfc\xcb\xdc\xb8\xec\xa4\xce\xca\xb8\xbe\xcf\xa4\xf2\xbd\xf1\xa4\xa4\xa4\xc6\xa4\xa4\xa4\xde\xa4\xb9\xa1\xa3\xa4\xd2\xa4\xe9\xa4\xac\xa4\xca\xa4\xc8\xa5\xab\xa5\xbf\xa5\xab\xa5\xca\xa4\xc8\xb4\xc1\xbb\xfa\xa4\xac\xa4\xa2\xa4\xea\xa4\xde\xa4\xb9\xa1\xa3";
// "我們的國家是一個美麗的地方，人民都很好。這是中文的文章，我們在學習。" in Big5.
const BIG5_TEXT: &[u8] = b"\xa7\xda\xad\xcc\xaa\xba\xb0\xea\xaea\xacO\xa4@\xad\xd3\xac\xfc\xc4R\xaa\xba\xa6a\xa4\xe8\xa1A\xa4H\xa5\xc1\xb3\xa3\xab\xdc\xa6n\xa1C\xb3o\xacO\xa4\xa4\xa4\xe5\xaa\xba\xa4\xe5\xb3\xb9\xa1A\xa7\xda\xad\xcc\xa6b\xbe\xc7\xb2\xdf\xa1C";
// "我們的國家是一個美麗的地方，人民都很好。這是中文的文章，我們在學習。" in EUC-TW (CNS 11643 plane 1).
const EUC_TW_TEXT: &[u8] = b"\xca\xbc\xd4\xaf\xce\xfb\xd9\xcf\xd5\xa5\xd1\xd2\xc4\xa1\xd4\xb6\xd3\xa1\xf9\xde\xce\xfb\xc7\xe2\xc5\xc9\xa1\xa2\xc4\xa9\xc6\xe1\xdd\xe7\xd0\xfe\xc7\xef\xa1\xa4\xdd\xd5\xd1\xd2\xc4\xe3\xc5\xc6\xce\xfb\xc5\xc6\xdd\xfd\xa1\xa2\xca\xbc\xd4\xaf\xc7\xe3\xf0\xd0\xdc\xe4\xa1\xa4";
// Russian prose in windows-1251.
const RUSSIAN_WINDOWS_1251: &[u8] = b"\xc2 \xed\xe0\xf7\xe0\xeb\xe5 \xe1\xfb\xeb\xee \xd1\xeb\xee\xe2\xee, \xe8 \xd1\xeb\xee\xe2\xee \xe1\xfb\xeb\xee \xf3 \xc1\xee\xe3\xe0, \xe8 \xd1\xeb\xee\xe2\xee \xe1\xfb\xeb\xee \xc1\xee\xe3. \xce\xed\xee \xe1\xfb\xeb\xee \xe2 \xed\xe0\xf7\xe0\xeb\xe5 \xf3 \xc1\xee\xe3\xe0. \xc2\xf1\xe5 \xf7\xe5\xf0\xe5\xe7 \xcd\xe5\xe3\xee \xed\xe0\xf7\xe0\xeb\xee \xe1\xfb\xf2\xfc, \xe8 \xe1\xe5\xe7 \xcd\xe5\xe3\xee \xed\xe8\xf7\xf2\xee \xed\xe5 \xed\xe0\xf7\xe0\xeb\xee \xe1\xfb\xf2\xfc, \xf7\xf2\xee \xed\xe0\xf7\xe0\xeb\xee \xe1\xfb\xf2\xfc. \xc2 \xcd\xe5\xec \xe1\xfb\xeb\xe0 \xe6\xe8\xe7\xed\xfc, \xe8 \xe6\xe8\xe7\xed\xfc \xe1\xfb\xeb\xe0 \xf1\xe2\xe5\xf2 \xf7\xe5\xeb\xee\xe2\xe5\xea\xee\xe2.";
// Russian prose in KOI8-R.
const RUSSIAN_KOI8_R: &[u8] = b"\xf7 \xce\xc1\xde\xc1\xcc\xc5 \xc2\xd9\xcc\xcf \xf3\xcc\xcf\xd7\xcf, \xc9 \xf3\xcc\xcf\xd7\xcf \xc2\xd9\xcc\xcf \xd5 \xe2\xcf\xc7\xc1, \xc9 \xf3\xcc\xcf\xd7\xcf \xc2\xd9\xcc\xcf \xe2\xcf\xc7. \xef\xce\xcf \xc2\xd9\xcc\xcf \xd7 \xce\xc1\xde\xc1\xcc\xc5 \xd5 \xe2\xcf\xc7\xc1. \xf7\xd3\xc5 \xde\xc5\xd2\xc5\xda \xee\xc5\xc7\xcf \xce\xc1\xde\xc1\xcc\xcf \xc2\xd9\xd4\xd8, \xc9 \xc2\xc5\xda \xee\xc5\xc7\xcf \xce\xc9\xde\xd4\xcf \xce\xc5 \xce\xc1\xde\xc1\xcc\xcf \xc2\xd9\xd4\xd8, \xde\xd4\xcf \xce\xc1\xde\xc1\xcc\xcf \xc2\xd9\xd4\xd8. \xf7 \xee\xc5\xcd \xc2\xd9\xcc\xc1 \xd6\xc9\xda\xce\xd8, \xc9 \xd6\xc9\xda\xce\xd8 \xc2\xd9\xcc\xc1 \xd3\xd7\xc5\xd4 \xde\xc5\xcc\xcf\xd7\xc5\xcb\xcf\xd7.";
// Russian prose in ISO-8859-5.
const RUSSIAN_ISO_8859_5: &[u8] = b"\xb2 \xdd\xd0\xe7\xd0\xdb\xd5 \xd1\xeb\xdb\xde \xc1\xdb\xde\xd2\xde, \xd8 \xc1\xdb\xde\xd2\xde \xd1\xeb\xdb\xde \xe3 \xb1\xde\xd3\xd0, \xd8 \xc1\xdb\xde\xd2\xde \xd1\xeb\xdb\xde \xb1\xde\xd3. \xbe\xdd\xde \xd1\xeb\xdb\xde \xd2 \xdd\xd0\xe7\xd0\xdb\xd5 \xe3 \xb1\xde\xd3\xd0. \xb2\xe1\xd5 \xe7\xd5\xe0\xd5\xd7 \xbd\xd5\xd3\xde \xdd\xd0\xe7\xd0\xdb\xde \xd1\xeb\xe2\xec, \xd8 \xd1\xd5\xd7 \xbd\xd5\xd3\xde \xdd\xd8\xe7\xe2\xde \xdd\xd5 \xdd\xd0\xe7\xd0\xdb\xde \xd1\xeb\xe2\xec, \xe7\xe2\xde \xdd\xd0\xe7\xd0\xdb\xde \xd1\xeb\xe2\xec. \xb2 \xbd\xd5\xdc \xd1\xeb\xdb\xd0 \xd6\xd8\xd7\xdd\xec, \xd8 \xd6\xd8\xd7\xdd\xec \xd1\xeb\xdb\xd0 \xe1\xd2\xd5\xe2 \xe7\xd5\xdb\xde\xd2\xd5\xda\xde\xd2.";
// Russian prose in IBM866.
const RUSSIAN_IBM866: &[u8] = b"\x82 \xad\xa0\xe7\xa0\xab\xa5 \xa1\xeb\xab\xae \x91\xab\xae\xa2\xae, \xa8 \x91\xab\xae\xa2\xae \xa1\xeb\xab\xae \xe3 \x81\xae\xa3\xa0, \xa8 \x91\xab\xae\xa2\xae \xa1\xeb\xab\xae \x81\xae\xa3. \x8e\xad\xae \xa1\xeb\xab\xae \xa2 \xad\xa0\xe7\xa0\xab\xa5 \xe3 \x81\xae\xa3\xa0. \x82\xe1\xa5 \xe7\xa5\xe0\xa5\xa7 \x8d\xa5\xa3\xae \xad\xa0\xe7\xa0\xab\xae \xa1\xeb\xe2\xec, \xa8 \xa1\xa5\xa7 \x8d\xa5\xa3\xae \xad\xa8\xe7\xe2\xae \xad\xa5 \xad\xa0\xe7\xa0\xab\xae \xa1\xeb\xe2\xec, \xe7\xe2\xae \xad\xa0\xe7\xa0\xab\xae \xa1\xeb\xe2\xec. \x82 \x8d\xa5\xac \xa1\xeb\xab\xa0 \xa6\xa8\xa7\xad\xec, \xa8 \xa6\xa8\xa7\xad\xec \xa1\xeb\xab\xa0 \xe1\xa2\xa5\xe2 \xe7\xa5\xab\xae\xa2\xa5\xaa\xae\xa2.";
// Greek prose in ISO-8859-7.
const GREEK_ISO_8859_7: &[u8] = b"\xd3\xf4\xe7\xed \xe1\xf1\xf7\xde \xde\xf4\xe1\xed \xef \xcb\xfc\xe3\xef\xf2, \xea\xe1\xe9 \xef \xcb\xfc\xe3\xef\xf2 \xde\xf4\xe1\xed \xec\xe1\xe6\xdf \xec\xe5 \xf4\xef\xed \xc8\xe5\xfc, \xea\xe1\xe9 \xc8\xe5\xfc\xf2 \xde\xf4\xe1\xed \xef \xcb\xfc\xe3\xef\xf2. \xc1\xf5\xf4\xfc\xf2 \xde\xf4\xe1\xed \xf3\xf4\xe7\xed \xe1\xf1\xf7\xde \xec\xe1\xe6\xdf \xec\xe5 \xf4\xef\xed \xc8\xe5\xfc. \xd4\xe1 \xf0\xdc\xed\xf4\xe1 \xdd\xe3\xe9\xed\xe1\xed \xec\xdd\xf3\xf9 \xe1\xf5\xf4\xef\xfd, \xea\xe1\xe9 \xf7\xf9\xf1\xdf\xf2 \xe1\xf5\xf4\xfc\xed \xe4\xe5\xed \xdd\xe3\xe9\xed\xe5 \xef\xfd\xf4\xe5 \xdd\xed\xe1.";
// Bulgarian prose in windows-1251.
const BULGARIAN_WINDOWS_1251: &[u8] = b"\xc2 \xed\xe0\xf7\xe0\xeb\xee\xf2\xee \xe1\xe5\xf8\xe5 \xd1\xeb\xee\xe2\xee\xf2\xee, \xe8 \xd1\xeb\xee\xe2\xee\xf2\xee \xe1\xe5\xf8\xe5 \xf3 \xc1\xee\xe3\xe0, \xe8 \xd1\xeb\xee\xe2\xee\xf2\xee \xe1\xe5\xf8\xe5 \xc1\xee\xe3. \xd2\xee \xe1\xe5\xf8\xe5 \xe2 \xed\xe0\xf7\xe0\xeb\xee\xf2\xee \xf3 \xc1\xee\xe3\xe0. \xc2\xf1\xe8\xf7\xea\xee \xf2\xee\xe2\xe0 \xf7\xf0\xe5\xe7 \xcd\xe5\xe3\xee \xf1\xf2\xe0\xed\xe0, \xe8 \xe1\xe5\xe7 \xcd\xe5\xe3\xee \xed\xe5 \xe5 \xf1\xf2\xe0\xed\xe0\xeb\xee \xed\xe8\xf9\xee \xee\xf2 \xf2\xee\xe2\xe0, \xea\xee\xe5\xf2\xee \xe5 \xf1\xf2\xe0\xed\xe0\xeb\xee.";
// Hebrew prose in windows-1255.
const HEBREW_WINDOWS_1255: &[u8] = b"\xe1\xf8\xe0\xf9\xe9\xfa \xe1\xf8\xe0 \xe0\xec\xe4\xe9\xed \xe0\xfa \xe4\xf9\xee\xe9\xed \xe5\xe0\xfa \xe4\xe0\xf8\xf5. \xe5\xe4\xe0\xf8\xf5 \xe4\xe9\xfa\xe4 \xfa\xe4\xe5 \xe5\xe1\xe4\xe5 \xe5\xe7\xf9\xea \xf2\xec \xf4\xf0\xe9 \xfa\xe4\xe5\xed \xe5\xf8\xe5\xe7 \xe0\xec\xe4\xe9\xed \xee\xf8\xe7\xf4\xfa \xf2\xec \xf4\xf0\xe9 \xe4\xee\xe9\xed. \xe5\xe9\xe0\xee\xf8 \xe0\xec\xe4\xe9\xed \xe9\xe4\xe9 \xe0\xe5\xf8 \xe5\xe9\xe4\xe9 \xe0\xe5\xf8. \xe5\xe9\xf8\xe0 \xe0\xec\xe4\xe9\xed \xe0\xfa \xe4\xe0\xe5\xf8 \xeb\xe9 \xe8\xe5\xe1 \xe5\xe9\xe1\xe3\xec \xe0\xec\xe4\xe9\xed \xe1\xe9\xef \xe4\xe0\xe5\xf8 \xe5\xe1\xe9\xef \xe4\xe7\xf9\xea.";
// Thai prose in TIS-620.
const THAI_TIS_620: &[u8] = b"\xe3\xb9\xbb\xb0\xc1\xa1\xd2\xc5 \xbe\xc3\xd0\xe0\xa8\xe9\xd2\xb7\xc3\xa7\xe0\xb9\xc3\xc1\xd4\xb5\xca\xc3\xe9\xd2\xa7\xbf\xe9\xd2\xe1\xc5\xd0\xe1\xbc\xe8\xb9\xb4\xd4\xb9 \xe1\xbc\xe8\xb9\xb4\xd4\xb9\xe2\xc5\xa1\xb9\xd1\xe9\xb9\xa1\xe7\xc3\xe9\xd2\xa7\xe0\xbb\xc5\xe8\xd2\xcd\xc2\xd9\xe8 \xa4\xc7\xd2\xc1\xc1\xd7\xb4\xcd\xc2\xd9\xe8\xe0\xcb\xb9\xd7\xcd\xbc\xd4\xc7\xb9\xe9\xd3 \xe1\xc5\xd0\xbe\xc3\xd0\xc7\xd4\xad\xad\xd2\xb3\xa2\xcd\xa7\xbe\xc3\xd0\xe0\xa8\xe9\xd2\xbb\xa1\xcd\xc2\xd9\xe8\xe0\xcb\xb9\xd7\xcd\xb9\xe9\xd3\xb9\xd1\xe9\xb9";
// French prose in windows-1252.
const FRENCH_WINDOWS_1252: &[u8] = b"Au commencement, Dieu cr\xe9a les cieux et la terre. La terre \xe9tait informe et vide: il y avait des t\xe9n\xe8bres \xe0 la surface de l'ab\xeeme, et l'esprit de Dieu se mouvait au-dessus des eaux. Dieu dit: Que la lumi\xe8re soit! Et la lumi\xe8re fut.";

fn run(detector: &mut UniversalDetector, chunks: &[&[u8]]) -> Option<&'static str> {
    for chunk in chunks {
        detector.handle_data(chunk);
    }
    detector.data_end();
    detector.charset()
}

#[test]
fn test_utf8_without_bom() {
    let mut detector = UniversalDetector::new(LanguageFilter::ALL);
    assert_eq!(run(&mut detector, &["héllo wörld".as_bytes()]), Some("UTF-8"));
    assert!(detector.confidence() > MINIMUM_THRESHOLD);
    assert_eq!(detector.input_state(), InputState::HighByte);
}

#[test]
fn test_utf8_found_before_end() {
    let mut detector = UniversalDetector::default();
    detector.handle_data("Grüße aus Köln, schöne Größe".as_bytes());
    assert!(detector.is_done());
    assert_eq!(detector.charset(), Some("UTF-8"));
}

#[test]
fn test_pure_ascii() {
    let detection = detect(b"hello world").unwrap();
    assert_eq!(detection.charset, ASCII_NAME);
    assert_eq!(detection.confidence, 1.0);
}

#[test]
fn test_unclaimed_escape_sequence_is_ascii() {
    let mut detector = UniversalDetector::default();
    assert_eq!(run(&mut detector, &[&b"plain \x1b[31mred\x1b[0m"[..]]), Some(ASCII_NAME));
    assert_eq!(detector.input_state(), InputState::EscAscii);
}

#[test]
fn test_empty_input_is_unknown() {
    assert_eq!(detect(b""), None);
}

#[test]
fn test_byte_order_marks() {
    for (bytes, charset) in [
        (&b"\xef\xbb\xbfabc"[..], "UTF-8"),
        (&b"\xfe\xff\x00a"[..], "UTF-16"),
        (&b"\xff\xfea\x00"[..], "UTF-16"),
    ] {
        let mut detector = UniversalDetector::default();
        detector.handle_data(bytes);
        assert!(detector.is_done());
        assert_eq!(detector.charset(), Some(charset));
        assert_eq!(detector.confidence(), 1.0);
    }
}

#[test]
fn test_bom_only_checked_on_first_chunk() {
    let mut detector = UniversalDetector::default();
    detector.handle_data(b"abc");
    detector.handle_data(b"\xef\xbb\xbf");
    assert!(!detector.is_done());
}

#[test]
fn test_iso_2022_jp() {
    let mut detector = UniversalDetector::default();
    detector.handle_data(b"\x1b$B$3$s$K$A$O\x1b(B");
    assert!(detector.is_done());
    assert_eq!(detector.charset(), Some("ISO-2022-JP"));
}

#[test]
fn test_iso_2022_kr_needs_korean() {
    let input: &[u8] = b"\x1b$)C\x0e>H\x0f";
    let mut detector = UniversalDetector::new(LanguageFilter::KOREAN);
    assert_eq!(run(&mut detector, &[input]), Some("ISO-2022-KR"));

    let mut detector = UniversalDetector::new(LanguageFilter::JAPANESE);
    assert_eq!(run(&mut detector, &[input]), Some(ASCII_NAME));
}

#[test]
fn test_hz_gb_2312() {
    let mut detector = UniversalDetector::new(LanguageFilter::CHINESE_SIMPLIFIED);
    assert_eq!(
        run(&mut detector, &[&b"plain ~{<:Ky2;S{#,NpJ)l6HK!#~} text"[..]]),
        Some("HZ-GB-2312")
    );
}

#[test]
fn test_gb18030() {
    let mut detector = UniversalDetector::new(LanguageFilter::CHINESE_SIMPLIFIED);
    assert_eq!(run(&mut detector, &[GB2312_TEXT]), Some("GB18030"));
    assert!(detector.confidence() > 0.9);
}

#[test]
fn test_gb18030_in_small_chunks() {
    let mut detector = UniversalDetector::new(LanguageFilter::CHINESE_SIMPLIFIED);
    let chunks: Vec<&[u8]> = GB2312_TEXT.chunks(3).collect();
    assert_eq!(run(&mut detector, &chunks), Some("GB18030"));
}

#[test]
fn test_shift_jis() {
    let mut detector = UniversalDetector::new(LanguageFilter::JAPANESE);
    assert_eq!(run(&mut detector, &[SJIS_TEXT]), Some("Shift_JIS"));
    assert!(detector.confidence() > MINIMUM_THRESHOLD);
}

#[test]
fn test_euc_kr() {
    let mut detector = UniversalDetector::new(LanguageFilter::KOREAN);
    assert_eq!(run(&mut detector, &[EUC_KR_TEXT]), Some("EUC-KR"));
}

#[test]
fn test_euc_jp() {
    let mut detector = UniversalDetector::new(LanguageFilter::JAPANESE);
    assert_eq!(run(&mut detector, &[EUC_JP_TEXT]), Some("EUC-JP"));
    assert_eq!(detect(EUC_JP_TEXT).map(|d| d.charset), Some("EUC-JP"));
}

#[test]
fn test_big5() {
    let mut detector = UniversalDetector::new(LanguageFilter::CHINESE_TRADITIONAL);
    assert_eq!(run(&mut detector, &[BIG5_TEXT]), Some("Big5"));
    assert!(detector.confidence() > 0.9);
    assert_eq!(detect(BIG5_TEXT).map(|d| d.charset), Some("Big5"));
}

#[test]
fn test_euc_tw() {
    let mut detector = UniversalDetector::new(LanguageFilter::CHINESE_TRADITIONAL);
    assert_eq!(run(&mut detector, &[EUC_TW_TEXT]), Some("x-euc-tw"));
    assert!(detector.confidence() > 0.9);
    assert_eq!(detect(EUC_TW_TEXT).map(|d| d.charset), Some("x-euc-tw"));
}

#[test]
fn test_russian_charsets() {
    for (bytes, charset) in [
        (RUSSIAN_WINDOWS_1251, "windows-1251"),
        (RUSSIAN_KOI8_R, "KOI8-R"),
        (RUSSIAN_ISO_8859_5, "ISO-8859-5"),
        (RUSSIAN_IBM866, "IBM866"),
    ] {
        let detection = detect(bytes).unwrap();
        assert_eq!(detection.charset, charset);
        assert!(detection.confidence > 0.9, "{charset}: {}", detection.confidence);
    }
}

#[test]
fn test_greek() {
    let detection = detect(GREEK_ISO_8859_7).unwrap();
    assert_eq!(detection.charset, "ISO-8859-7");
    assert!(detection.confidence > 0.8);
}

#[test]
fn test_bulgarian() {
    assert_eq!(detect(BULGARIAN_WINDOWS_1251).map(|d| d.charset), Some("windows-1251"));
}

#[test]
fn test_hebrew_logical_and_visual() {
    assert_eq!(detect(HEBREW_WINDOWS_1255).map(|d| d.charset), Some("windows-1255"));

    let visual: Vec<u8> = HEBREW_WINDOWS_1255.iter().rev().copied().collect();
    assert_eq!(detect(&visual).map(|d| d.charset), Some("ISO-8859-8"));
}

#[test]
fn test_thai() {
    let detection = detect(THAI_TIS_620).unwrap();
    assert_eq!(detection.charset, "TIS-620");
    assert!(detection.confidence > MINIMUM_THRESHOLD);
}

#[test]
fn test_western_text_is_not_claimed() {
    assert_eq!(detect(FRENCH_WINDOWS_1252).map(|d| d.charset), None);
}

#[test]
fn test_single_byte_models() {
    let models = SingleByteModels {
        models: vec![&lang_models::KOI8_R_RUSSIAN],
        hebrew: None,
    };
    let mut detector =
        UniversalDetector::with_single_byte_models(LanguageFilter::ALL, models.clone());
    assert_eq!(run(&mut detector, &[RUSSIAN_WINDOWS_1251]), None);

    let mut detector =
        UniversalDetector::with_single_byte_models(LanguageFilter::ALL, models.clone());
    assert_eq!(run(&mut detector, &[RUSSIAN_KOI8_R]), Some("KOI8-R"));

    // Without NON_CJK the single-byte group never runs.
    let mut detector = UniversalDetector::with_single_byte_models(LanguageFilter::CJK, models);
    assert_ne!(run(&mut detector, &[RUSSIAN_KOI8_R]), Some("KOI8-R"));

    let mut detector =
        UniversalDetector::with_single_byte_models(LanguageFilter::ALL, SingleByteModels::none());
    assert_ne!(run(&mut detector, &[RUSSIAN_KOI8_R]), Some("KOI8-R"));
}

#[test]
fn test_done_ignores_further_input() {
    let mut detector = UniversalDetector::default();
    detector.handle_data(b"\xef\xbb\xbfabc");
    detector.handle_data(GB2312_TEXT);
    detector.data_end();
    assert_eq!(detector.charset(), Some("UTF-8"));
}

fn probers() -> Vec<Box<dyn CharsetProber>> {
    vec![
        Box::new(Utf8Prober::new()),
        Box::new(Latin1Prober::new()),
        Box::new(EscCharsetProber::new(LanguageFilter::ALL)),
        Box::new(MultiByteProber::new(CjkEncoding::ShiftJis, false)),
        Box::new(MultiByteProber::new(CjkEncoding::EucKr, true)),
        Box::new(MbcsGroupProber::new(LanguageFilter::ALL)),
    ]
}

proptest! {
    #[test]
    fn test_terminal_states_are_absorbing(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..12),
    ) {
        for mut prober in probers() {
            let mut terminal: Option<(ProbingState, f32)> = None;
            for chunk in &chunks {
                let state = prober.handle_data(chunk);
                prop_assert_eq!(state, prober.state());
                if let Some((expected_state, expected_confidence)) = terminal {
                    prop_assert_eq!(state, expected_state);
                    prop_assert_eq!(prober.confidence(), expected_confidence);
                } else if state.is_terminal() {
                    terminal = Some((state, prober.confidence()));
                }
            }
        }
    }

    #[test]
    fn test_confidence_in_unit_range(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Some(detection) = detect(&bytes) {
            prop_assert!((0.0..=1.0).contains(&detection.confidence));
        }
        for mut prober in probers() {
            prober.handle_data(&bytes);
            let confidence = prober.confidence();
            prop_assert!((0.0..=1.0).contains(&confidence), "{:?}: {}", prober, confidence);
        }
    }
}
