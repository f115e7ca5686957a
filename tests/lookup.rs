use cedict_lookup::{DictError, Dictionary, Field, FieldValue, ParseError, parse_line};

const FIELDS: [Field; 4] = Field::ALL;

fn bundled() -> Dictionary {
    Dictionary::new().expect("bundled dataset should load")
}

#[test]
fn get_definitions() {
    assert_eq!(bundled().get_definitions("猫").unwrap()[0], "cat");
}

#[test]
fn get_pinyin() {
    assert_eq!(bundled().get_pinyin("猫"), Some("mao1"));
}

#[test]
fn get_simplified() {
    let dict = bundled();
    assert_eq!(dict.get_simplified("猫"), Some("猫"));
    assert_eq!(dict.get_simplified("貓"), Some("猫"));
}

#[test]
fn get_traditional() {
    let dict = bundled();
    assert_eq!(dict.get_traditional("猫"), Some("貓"));
    assert_eq!(dict.get_traditional("貓"), Some("貓"));
}

#[test]
fn get_entry() {
    let dict = bundled();
    for chinese in ["猫", "貓"] {
        let entry = dict.get_entry(chinese).unwrap();
        assert_eq!(entry.traditional, "貓");
        assert_eq!(entry.simplified, "猫");
        assert_eq!(entry.pinyin, "mao1");
        assert!(!entry.definitions.is_empty());
    }
}

#[test]
fn get_entries() {
    let entries = bundled().get_entries().to_vec();
    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(!entry.traditional.is_empty());
        assert!(!entry.simplified.is_empty());
        assert!(!entry.pinyin.is_empty());
        assert!(!entry.definitions.is_empty());
    }
}

#[test]
fn earlier_duplicates_stay_in_entries() {
    let dict = bundled();
    let readings: Vec<_> = dict
        .get_entries()
        .iter()
        .filter(|entry| entry.simplified == "猫")
        .map(|entry| entry.pinyin.as_str())
        .collect();
    assert_eq!(readings, vec!["Mao1", "mao1"]);
    assert_eq!(dict.get_pinyin("好"), Some("hao4"));
}

#[test]
fn every_entry_is_reachable_from_its_keys() {
    let dict = bundled();
    for entry in dict.get_entries() {
        let by_simplified = dict.get_entry(&entry.simplified).unwrap();
        assert_eq!(by_simplified.simplified, entry.simplified);
        if dict.get_entry(&entry.traditional).unwrap().traditional != entry.traditional {
            // A traditional headword that is also some line's simplified form.
            assert!(dict.get_entries().iter().any(|e| e.simplified == entry.traditional));
        }
    }
}

#[test]
fn get_field_projects_get_entry() {
    let dict = bundled();
    for headword in ["猫", "貓", "中國", "中国", "干", "乾", "幹", "not a word"] {
        for field in FIELDS {
            let expected = dict.get_entry(headword).map(|entry| entry.field(field));
            assert_eq!(dict.get_field(headword, field), expected);
        }
    }
    assert_eq!(
        dict.get_field("中國", Field::Simplified),
        Some(FieldValue::Text("中国"))
    );
}

#[test]
fn unknown_headwords_are_absent() {
    let dict = bundled();
    for headword in ["", " ", "cat", "mao1", "猫猫", "#", "%%"] {
        assert!(dict.get_entry(headword).is_none(), "{headword:?}");
        for field in FIELDS {
            assert!(dict.get_field(headword, field).is_none());
        }
    }
}

#[test]
fn comment_lines_contribute_nothing() {
    let with_comments =
        Dictionary::from_lines(["# CC-CEDICT", "#! version=1", "狗 狗 [gou3] /dog/"]).unwrap();
    let without = Dictionary::from_lines(["狗 狗 [gou3] /dog/"]).unwrap();
    assert_eq!(with_comments.get_entries(), without.get_entries());
}

#[test]
fn line_without_slash_aborts_construction() {
    let result = Dictionary::from_lines(["狗 狗 [gou3] /dog/", "貓 猫 [mao1] cat"]);
    assert!(matches!(
        result,
        Err(DictError::Malformed {
            line_number: 2,
            source: ParseError::MissingSlash,
            ..
        })
    ));
}

#[test]
fn reparsing_is_stable() {
    let line = "貓 猫 [mao1] /cat/(dialect) to hide oneself/(coll.) modem/CL:隻|只[zhi1]/\n";
    let first = parse_line(line).unwrap();
    let second = parse_line(line).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bundled_dataset_is_a_sample() {
    let dict = bundled();
    assert!(dict.len() < 100, "bundled dataset has {} entries", dict.len());
}
