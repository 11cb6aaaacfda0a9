use currency_words::core::amount::amount_to_words;
use currency_words::core::digits::teen_word;
use currency_words::core::groups::convert_group;
use currency_words::{
    convert, AmountSide, ConversionError, Currency, CurrencyUnit, NumberToWordsConverter,
};

#[test]
fn test_documented_scenarios() {
    assert_eq!(convert("0").unwrap(), "zero dollars");
    assert_eq!(convert("1,5").unwrap(), "one dollar and fifty cents");
    assert_eq!(convert("1000000").unwrap(), "one million dollars");
    assert_eq!(
        convert("1234,05").unwrap(),
        "one thousand two hundred thirty-four dollars and five cents"
    );
    assert_eq!(
        convert("45 100,99").unwrap(),
        "fourty-five thousand one hundred dollars and ninety-nine cents"
    );
}

#[test]
fn test_cardinality_depends_on_rendered_words() {
    assert_eq!(convert("1").unwrap(), "one dollar");
    assert_eq!(convert("01").unwrap(), "one dollar");
    assert_eq!(convert("100").unwrap(), "one hundred dollars");
    assert_eq!(convert("1001").unwrap(), "one thousand one dollars");
    assert_eq!(convert("0,01").unwrap(), "zero dollars and one cent");
    assert_eq!(convert("3,1").unwrap(), "three dollars and ten cents");
}

#[test]
fn test_zero_only_comes_from_zero_input() {
    for raw in ["0", "00", "000000000", " 0 "] {
        assert_eq!(convert(raw).unwrap(), "zero dollars", "{}", raw);
    }
    assert_eq!(convert("0,0").unwrap(), "zero dollars and zero cents");
}

#[test]
fn test_teen_tails_never_use_hyphenation() {
    for hundreds in ['1', '5', '9'] {
        for ones in 0..=9 {
            let group = format!("{}1{}", hundreds, ones);
            let words = convert_group(&group).unwrap();
            assert!(!words.contains('-'), "{} -> {}", group, words);
            let teen = teen_word(&group[1..]).unwrap();
            assert!(words.ends_with(&format!(" {}", teen)), "{} -> {}", group, words);
        }
    }
}

#[test]
fn test_round_tens_have_no_trailing_hyphen() {
    for tens in 2..=9 {
        let words = amount_to_words(&format!("{}0", tens)).unwrap();
        assert!(!words.ends_with('-'), "{}", words);
    }
    assert_eq!(amount_to_words("40").unwrap(), "fourty");
}

#[test]
fn test_largest_amount() {
    assert_eq!(
        convert("999999999,99").unwrap(),
        "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine dollars and ninety-nine cents"
    );
}

#[test]
fn test_two_separators_are_invalid() {
    assert!(matches!(
        convert("1,2,3"),
        Err(ConversionError::InvalidInput { .. })
    ));
}

#[test]
fn test_eleven_digits_are_too_large() {
    let err = convert("12345678901").unwrap_err();
    match &err {
        ConversionError::AmountTooLarge { side, max, digits, .. } => {
            assert_eq!(*side, AmountSide::Units);
            assert_eq!(max, "999999999");
            assert_eq!(*digits, 11);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("999999999"));
}

#[test]
fn test_three_subunit_digits_are_too_large() {
    assert!(matches!(
        convert("1,234"),
        Err(ConversionError::AmountTooLarge {
            side: AmountSide::Subunits,
            ..
        })
    ));
}

#[test]
fn test_null_and_blank_input() {
    assert!(matches!(
        convert(None::<&str>),
        Err(ConversionError::InvalidInput { .. })
    ));
    assert!(matches!(convert(""), Err(ConversionError::InvalidInput { .. })));
    assert!(matches!(convert("  "), Err(ConversionError::InvalidInput { .. })));
}

#[test]
fn test_custom_currency_nouns() {
    let converter = NumberToWordsConverter::new(Currency::new(
        CurrencyUnit::new("pound", "pounds"),
        CurrencyUnit::new("penny", "pence"),
    ));
    assert_eq!(converter.convert("1,01").unwrap(), "one pound and one penny");
    assert_eq!(converter.convert("12,5").unwrap(), "twelve pounds and fifty pence");
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = std::sync::Arc::new(NumberToWordsConverter::dollars());
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(n.to_string().as_str()).unwrap())
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec!["one dollar", "two dollars", "three dollars", "four dollars"]
    );
}
