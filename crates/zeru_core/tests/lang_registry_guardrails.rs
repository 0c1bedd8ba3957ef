use std::collections::HashMap;

use zeru_core::lang::escapes;
use zeru_core::lang::keywords;
use zeru_core::lang::operators::{self, Fixity};
use zeru_core::lang::punctuation;
use zeru_core::lang::types;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for (idx, info) in keywords::KEYWORDS.iter().enumerate() {
        assert_eq!(info.id as usize, idx, "KEYWORDS out of discriminant order at {:?}", info.id);
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for (idx, info) in operators::OPERATORS.iter().enumerate() {
        assert_eq!(info.id as usize, idx, "OPERATORS out of discriminant order at {:?}", info.id);
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_spelled_operators_are_keywords() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        assert!(
            keywords::from_str(info.spelling).is_some(),
            "operator {:?} claims a keyword spelling but {:?} is not reserved",
            info.id,
            info.spelling
        );
    }
}

#[test]
fn infix_precedences_sit_below_prefix() {
    for info in operators::OPERATORS {
        match info.fixity {
            Fixity::Infix => assert!(
                info.precedence > 0 && info.precedence < operators::PREFIX_PRECEDENCE,
                "infix operator {:?} has precedence {} outside (0, {})",
                info.id,
                info.precedence,
                operators::PREFIX_PRECEDENCE
            ),
            Fixity::Prefix => assert_eq!(info.precedence, operators::PREFIX_PRECEDENCE),
            Fixity::Assignment => {
                assert_eq!(info.precedence, 0);
                assert!(operators::is_assignment(info.id));
            }
        }
    }
}

#[test]
fn operators_sharing_a_level_share_associativity() {
    let mut levels: HashMap<u8, operators::Associativity> = HashMap::new();
    for info in operators::OPERATORS.iter().filter(|o| o.fixity == Fixity::Infix) {
        if let Some(prev) = levels.insert(info.precedence, info.associativity) {
            assert_eq!(
                prev, info.associativity,
                "precedence level {} mixes associativities (at {:?})",
                info.precedence, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for (idx, info) in punctuation::PUNCTUATION.iter().enumerate() {
        assert_eq!(info.id as usize, idx, "PUNCTUATION out of discriminant order at {:?}", info.id);
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_and_operators_do_not_overlap() {
    for info in punctuation::PUNCTUATION {
        assert!(
            operators::from_str(info.canonical).is_none(),
            "{:?} is registered as both punctuation and an operator",
            info.canonical
        );
    }
}

#[test]
fn primitive_types_are_not_keywords() {
    for (idx, info) in types::PRIMITIVE_TYPES.iter().enumerate() {
        assert_eq!(info.id as usize, idx, "PRIMITIVE_TYPES out of discriminant order at {:?}", info.id);
        assert_eq!(types::from_str(info.canonical), Some(info.id));
        assert!(
            keywords::from_str(info.canonical).is_none(),
            "primitive type {:?} collides with a keyword",
            info.canonical
        );
    }
    assert!(keywords::from_str(types::ARRAY_TYPE_NAME).is_none());
}

#[test]
fn escape_markers_unique() {
    let mut seen: HashMap<char, usize> = HashMap::new();
    for (idx, info) in escapes::ESCAPES.iter().enumerate() {
        if let Some(prev) = seen.insert(info.marker, idx) {
            panic!("duplicate escape marker {:?} at {} and {}", info.marker, prev, idx);
        }
    }
    assert!(escapes::lookup('\'').is_none(), "\\' must not be an escape");
}
