use stackfish_cli::exit_code;

#[test]
fn sim_writes_one_jsonl_record_per_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let path_str = path.to_str().unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = stackfish_cli::run(
        vec![
            "stackfish", "sim", "--matches", "2", "--seed", "9", "--output", path_str,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, exit_code::SUCCESS);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2, "one line per match");
    for line in text.lines() {
        assert!(line.contains("\"match_id\""));
        assert!(line.contains("\"turns\""));
    }

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("results: North="));
    assert!(output.contains(path_str));
}

#[test]
fn sim_is_deterministic_for_a_seed() {
    let run_once = || {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = stackfish_cli::run(
            vec!["stackfish", "sim", "--matches", "3", "--seed", "123"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);
        String::from_utf8(out).unwrap()
    };

    assert_eq!(run_once(), run_once());
}

#[test]
fn sim_without_output_writes_no_files() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = stackfish_cli::run(
        vec!["stackfish", "sim", "--matches", "1", "--seed", "5"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, exit_code::SUCCESS);
    let output = String::from_utf8(out).unwrap();
    assert!(!output.contains("history written"));
}
