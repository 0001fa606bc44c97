//! Property tests for the codec laws.

use proptest::prelude::*;

use synhide::text::{tokenize, words};
use synhide::{bits, read, required_bits, write, SynonymTable};

fn table() -> SynonymTable {
    SynonymTable::build([("happy", "joyful"), ("sad", "unhappy"), ("big", "large")]).unwrap()
}

fn carrier_for(secret: &str, filler: &[String]) -> String {
    let slots = ["happy", "sad", "big"];
    let mut carrier = String::new();
    for i in 0..required_bits(secret) {
        carrier.push_str(slots[i % slots.len()]);
        carrier.push_str(", ");
        for word in filler {
            carrier.push_str(word);
            carrier.push(' ');
        }
    }
    carrier
}

proptest! {
    #[test]
    fn secret_survives_roundtrip(
        secret in "\\PC{0,24}",
        filler in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let table = table();
        let carrier = carrier_for(&secret, &filler);

        let stego = write(&carrier, &secret, &table).unwrap();
        prop_assert_eq!(read(&stego, &table).unwrap(), secret);
    }

    #[test]
    fn unmatched_words_pass_through(
        secret in "[ -~]{0,8}",
        filler in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let table = table();
        let carrier = carrier_for(&secret, &filler);
        let stego = write(&carrier, &secret, &table).unwrap();

        let keep = |w: &&str| !table.contains(w);
        let before: Vec<_> = words(&carrier).filter(keep).collect();
        let after: Vec<_> = words(&stego).filter(keep).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn tokens_reassemble_input(text in any::<String>()) {
        let joined: String = tokenize(&text).map(|t| t.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn bit_codec_roundtrip(text in any::<String>()) {
        let encoded = bits::encode(&text);
        prop_assert_eq!(encoded.len(), text.len() * 8);
        prop_assert_eq!(bits::decode(&encoded).unwrap(), text);
    }
}
