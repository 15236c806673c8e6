use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_tables_prepare::tables::compositions::Composite;
use unicode_tables_prepare::tables::relative::Mapped;
use unicode_tables_source::properties::GeneralCategory;

use crate::fixture::{to_codes, to_string, PROPERTIES, TABLES};

/// исключены из композиции (CompositionExclusions.txt, исключения нестартеров)
const EXCLUDED: [u32; 2] = [0x344, 0x1D15E];

/// декомпозиции совпадают с NFD ICU
#[test]
fn decomposition()
{
    let nfd = DecomposingNormalizer::new_nfd();

    for (&code, decomposition) in TABLES.decompositions.iter() {
        let expected = to_codes(&nfd.normalize(&to_string(&[code])));

        assert_eq!(decomposition, &expected, "U+{:04X}", code);

        match TABLES.decomposition.lookup(code) {
            Mapped::Single(value) => assert_eq!(vec![value], expected),
            Mapped::Multiple(values) => assert_eq!(values, expected.as_slice()),
            Mapped::Identity => panic!("U+{:04X}: нет декомпозиции", code),
        }
    }

    // кодпоинты без декомпозиции, суррогаты не представимы строкой
    for codepoint in PROPERTIES.unicode.values() {
        if TABLES.decompositions.contains_key(&codepoint.code) || codepoint.gc == GeneralCategory::Surrogate {
            continue;
        }

        assert_eq!(TABLES.decomposition.lookup(codepoint.code), Mapped::Identity);
        assert_eq!(
            to_codes(&nfd.normalize(&to_string(&[codepoint.code]))),
            vec![codepoint.code],
            "U+{:04X}",
            codepoint.code
        );
    }
}

/// процедура композиции дает тот же результат, что и NFC ICU, для первичных композитов
#[test]
fn composition()
{
    let nfc = ComposingNormalizer::new_nfc();

    for (&code, decomposition) in TABLES.decompositions.iter() {
        let is_singleton = PROPERTIES.get(code).unwrap().decomposition.len() == 1;

        if is_singleton || EXCLUDED.contains(&code) {
            continue;
        }

        let expected = to_codes(&nfc.normalize(&to_string(decomposition)));
        assert_eq!(expected, vec![code], "U+{:04X}", code);

        assert_eq!(
            TABLES.composition.evaluate(decomposition),
            Some(Composite {
                code,
                length: decomposition.len() as u8
            })
        );
    }
}

/// префикс последовательности композируется так же, как в NFC
#[test]
fn partial_composition()
{
    let nfc = ComposingNormalizer::new_nfc();

    for input in [
        vec![0x3B1, 0x313, 0x300, 0x301],
        vec![0x63, 0x327, 0x300],
        vec![0x65, 0x301, 0x301],
    ] {
        let expected = to_codes(&nfc.normalize(&to_string(&input)));
        let result = TABLES.composition.evaluate(&input).unwrap();

        assert_eq!(result.code, expected[0]);
        assert_eq!(&input[result.length as usize ..], &expected[1 ..]);
    }
}
