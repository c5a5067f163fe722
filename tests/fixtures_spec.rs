use had_reader::{
    build_trie, decode_text, parse_palettes, Child, Cursor, HadError, HadReader, TextTrie,
    TERMINATOR,
};
use std::fs;
use std::path::PathBuf;

/// (text, encoded bytes) pairs produced by the editor's encoder.
const ENCODED_STRINGS: &[(&str, &[u8])] = &[
    ("A", &[0x74, 0x00]),
    ("HELLO", &[0xDF, 0xEB, 0x52, 0x80]),
    ("LEVEL 1", &[0xD7, 0x98, 0xFD, 0x53, 0x34, 0x00]),
    ("MARIO", &[0xE9, 0xC0, 0x65, 0x00]),
    ("YES", &[0xE7, 0xD5, 0x00]),
];

/// Editor test vector: the encoded name is followed by unrelated bytes.
const MANHATTAN: &[u8] = &[
    0x33, 0x58, 0xB8, 0x7D, 0x87, 0xED, 0xF7, 0xA7, 0x2D, 0xBC, 0x43, 0x96, 0x35, 0x40, 0x22,
    0x84, 0xF3, 0xA2,
];

const EXPECTED_PALETTES: &[(&str, [u16; 7])] = &[
    (
        "GRAYSCALE",
        [0x0001, 0x294B, 0x5295, 0x8421, 0xAD6B, 0xD6B5, 0xFFFF],
    ),
    (
        "SUNSET “RED”",
        [0xF801, 0xC981, 0xFC11, 0x0001, 0x4009, 0xFFC1, 0x8203],
    ),
];

fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

fn load_trie() -> TextTrie {
    let path = fixture_path(&["tests", "fixtures", "trie.bin"]);
    let raw = fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    build_trie(&raw).expect("build trie")
}

fn open_reader() -> HadReader {
    HadReader::new(
        fixture_path(&["tests", "fixtures", "palettes.had"]),
        fixture_path(&["tests", "fixtures", "trie.bin"]),
    )
    .expect("open asset")
}

#[test]
fn trie_fixture_structure() {
    let trie = load_trie();
    assert_eq!(trie.len(), 123);
    trie.verify().expect("fixture trie verifies");

    let root = trie.root().expect("root");
    assert_eq!(root.code_point, 0);
    assert_eq!(root.frequency, 10211);
    assert_eq!(root.child0, Child::Node(1));
    assert_eq!(root.child1, Child::Node(52));

    let r = trie.node(4).expect("node 4");
    assert_eq!((r.code_point, r.frequency, r.code), ('R' as u32, 482, 0b0000));
    let i = trie.node(5).expect("node 5");
    assert_eq!((i.code_point, i.frequency, i.code), ('I' as u32, 484, 0b0001));

    let terminators: Vec<usize> = trie
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, n)| n.code_point == TERMINATOR)
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(terminators, vec![22]);
    assert_eq!(trie.nodes()[22].code, 0b01000);
}

#[test]
fn editor_test_vector_decodes() {
    let trie = load_trie();
    let decoded = decode_text(MANHATTAN, &trie).expect("decode");
    assert_eq!(decoded.text, "1ST WE TAKE MANHATTAN…");
    assert_eq!(decoded.bytes_consumed, 14);
    assert_eq!(decoded.remaining(MANHATTAN), &[0x22, 0x84, 0xF3, 0xA2]);
}

#[test]
fn encoded_strings_decode() {
    let trie = load_trie();
    for (text, encoded) in ENCODED_STRINGS {
        let decoded =
            decode_text(encoded, &trie).unwrap_or_else(|e| panic!("decode {:?}: {}", text, e));
        assert_eq!(&decoded.text, text);
        assert_eq!(
            decoded.bytes_consumed,
            encoded.len(),
            "bytes consumed for {:?}",
            text
        );
    }
}

#[test]
fn terminator_ending_on_byte_boundary() {
    // "AA " plus terminator is exactly 16 bits
    let trie = load_trie();
    let decoded = decode_text(&[0x77, 0xA8], &trie).expect("decode");
    assert_eq!(decoded.text, "AA ");
    assert_eq!(decoded.bytes_consumed, 2);
}

#[test]
fn truncated_stream_is_unterminated() {
    let trie = load_trie();
    for cut in 0..14 {
        match decode_text(&MANHATTAN[..cut], &trie) {
            Err(HadError::UnterminatedStream { len }) => assert_eq!(len, cut),
            other => panic!("cut at {}: expected UnterminatedStream, got {:?}", cut, other),
        }
    }
}

#[test]
fn consecutive_strings_share_a_buffer() {
    let trie = load_trie();
    let mut buffer = Vec::new();
    for (_, encoded) in ENCODED_STRINGS {
        buffer.extend_from_slice(encoded);
    }

    let mut cursor = Cursor::new(&buffer);
    for (text, _) in ENCODED_STRINGS {
        let (decoded, next) = cursor.read_text(&trie).expect("read text");
        assert_eq!(&decoded, text);
        cursor = next;
    }
    assert!(cursor.is_empty());
}

#[test]
fn supported_characters() {
    let trie = load_trie();
    assert!(trie.supports("1st We Take Manhattan…"));
    assert!(!trie.supports("1st We Take Manhattan… べ"));
    assert_eq!(trie.symbols().len(), 61);
}

#[test]
fn palette_fixture_matches() {
    let reader = open_reader();
    let palettes = reader.palettes().expect("palettes");
    assert_eq!(palettes.len(), EXPECTED_PALETTES.len());

    for (palette, (name, raw)) in palettes.iter().zip(EXPECTED_PALETTES) {
        assert_eq!(&palette.name, name);
        let actual: Vec<u16> = palette.colors.iter().map(|c| c.raw()).collect();
        assert_eq!(actual, raw.to_vec(), "colors of {}", name);
    }

    let gray = &palettes[0].colors;
    assert_eq!(gray[0].rgb(), (0, 0, 0));
    assert_eq!(gray[3].rgb(), (128, 128, 128));
    assert_eq!(gray[6].hex(), "#f8f8f8");
    let sunset = &palettes[1].colors;
    assert_eq!(sunset[1].rgb(), (200, 48, 0));
    assert_eq!(sunset[6].rgb(), (128, 64, 8));
}

#[test]
fn palette_parsing_from_raw_bytes() {
    let trie = load_trie();
    let data = fs::read(fixture_path(&["tests", "fixtures", "palettes.had"])).expect("read asset");
    assert_eq!(data.len(), 44);
    assert_eq!(data[0], 2);

    let palettes = parse_palettes(&data, &trie).expect("palettes");
    assert_eq!(palettes[1].name, "SUNSET “RED”");

    // first name is 6 bytes, so the second starts after 1 + 6 + 14
    let decoded = decode_text(&data[21..], &trie).expect("second name");
    assert_eq!(decoded.text, "SUNSET “RED”");
    assert_eq!(decoded.bytes_consumed, 9);
}

#[test]
fn truncated_asset_fails_without_partial_result() {
    let trie = load_trie();
    let data = fs::read(fixture_path(&["tests", "fixtures", "palettes.had"])).expect("read asset");
    for cut in [1, 10, 21, 43] {
        assert!(
            parse_palettes(&data[..cut], &trie).is_err(),
            "expected failure when cut at {}",
            cut
        );
    }
}

#[test]
fn missing_files_are_io_errors() {
    let err = HadReader::new(
        fixture_path(&["tests", "fixtures", "palettes.had"]),
        fixture_path(&["tests", "fixtures", "missing-trie.bin"]),
    )
    .unwrap_err();
    assert!(matches!(err, HadError::Io(_)), "got {:?}", err);
}
