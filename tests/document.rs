use edict_parse::{parse_lines, parse_reader, Detail, EdictError, SyntaxError};

// The first few entries of edict2.
const EDICT2_HEAD: &[&str] = &[
    "刖 [げつ] /(n) (arch) (obsc) (See 剕) cutting off the leg at the knee (form of punishment in ancient China)/EntL2542160/",
    "剕 [あしきり] /(n) (arch) (See 五刑) cutting off the leg at the knee (form of punishment in ancient China)/EntL2542150/",
    "劓 [はなきり] /(n) (arch) (See 五刑) cutting off the nose (form of punishment in ancient China)/EntL2542140/",
    "匜;半挿 [はそう;はぞう] /(n) (1) (esp. ) wide-mouthed ceramic vessel having a small hole in its spherical base (into which bamboo was probably inserted to pour liquids)/(2) (See 半挿・はんぞう・1) teapot-like object made typically of lacquerware and used to pour hot and cold liquids/EntL2791750/",
    "咖哩(ateji) [カレー(P);カリー] /(n) (1) (uk) curry/(2) (abbr) (uk) (See カレーライス) rice and curry/(P)/EntL1039140X/",
    "嗉嚢;そ嚢 [そのう] /(n) bird's crop/bird's craw/EntL2542030/",
    "嘈囃;そう囃 [そうざつ] /(n,vs) (obsc) (嘈囃 is sometimes read むねやけ) (See 胸焼け) heartburn/sour stomach/EntL2542040/",
];

#[test]
fn parses_edict2_head() {
    let entries = parse_lines(EDICT2_HEAD).unwrap();
    assert_eq!(entries.len(), EDICT2_HEAD.len());

    let vessel = &entries[3];
    assert_eq!(vessel.kanji, ["匜", "半挿"]);
    assert_eq!(vessel.kana, ["はそう", "はぞう"]);
    assert_eq!(vessel.information, [Detail::N]);
    assert_eq!(vessel.glosses.len(), 2);
    assert!(vessel.glosses[0].definition.starts_with("wide-mouthed ceramic vessel"));
    assert!(vessel.glosses[0].details.is_empty());
    assert_eq!(vessel.glosses[1].xrefs, ["半挿・はんぞう・1"]);

    let curry = &entries[4];
    assert!(curry.priority);
    assert!(curry.recording_available);
    assert_eq!(curry.glosses.len(), 2);

    assert!(entries.iter().all(|entry| !entry.kanji.is_empty() && !entry.glosses.is_empty()));
    assert!(entries.iter().all(|entry| entry.sequence.starts_with("EntL")));
}

#[test]
fn reader_and_lines_agree() {
    let text = EDICT2_HEAD.join("\n");
    assert_eq!(parse_reader(text.as_bytes()).unwrap(), parse_lines(EDICT2_HEAD).unwrap());
}

#[test]
fn malformed_line_aborts_document() {
    let mut lines: Vec<&str> = EDICT2_HEAD.to_vec();
    lines.insert(2, "壊れ [こわれ /(n) broken/EntL9999999/");

    match parse_lines(&lines) {
        Err(EdictError::LineParseFailure { number, error }) => {
            assert_eq!(number, 3);
            assert_eq!(error.line, lines[2]);
            assert!(matches!(error.kind, SyntaxError::MalformedKey(_)));
        }
        other => panic!("expected a line failure, got {:?}", other),
    }
}

#[test]
fn entries_serialize_to_json() {
    let entries = parse_lines(&EDICT2_HEAD[..1]).unwrap();
    let json = serde_json::to_value(&entries[0]).unwrap();
    assert_eq!(json["kanji"], serde_json::json!(["刖"]));
    assert_eq!(json["information"], serde_json::json!(["n", "arch", "obsc"]));
    assert_eq!(json["glosses"][0]["xrefs"], serde_json::json!(["剕"]));
    assert_eq!(json["sequence"], "EntL2542160");
}
