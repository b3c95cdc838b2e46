use pretty_assertions::assert_eq;
use s16asm::{assemble, emit, Config, Diagnostics, Error, Kind};
use std::fs;

const PROGRAM: &str = "\
# load, then add
lri(r1, 5)
label(\"start\")
add(r1, r1, r2)
";

#[test]
fn end_to_end() {
    let mut diags = Diagnostics::quiet();
    let session = assemble("prog.s", PROGRAM, &mut diags).unwrap();

    let words = emit::encode_all(session.program());
    assert_eq!(words, vec![0x1051, 0x4112]);
    assert_eq!(emit::to_bytes(&words), vec![0x10, 0x51, 0x41, 0x12]);
    assert_eq!(session.idents().get_label("start"), Some(1));
    assert_eq!(emit::debug_info(session.program()), "prog.s:2\nprog.s:4\n");
    assert!(diags.all().is_empty());
}

#[test]
fn label_value_is_fixed_at_definition() {
    let mut diags = Diagnostics::quiet();
    let session = assemble(
        "l.s",
        "lri(r0, 1)\nlabel(\"L\")\nlri(r0, 2)\nlri(r0, 3)\njmp(L)",
        &mut diags,
    )
    .unwrap();
    assert_eq!(session.idents().get_label("L"), Some(1));
    assert_eq!(session.program().len(), 4);
    assert_eq!(emit::encode_all(session.program())[3], 0x5001);
}

#[test]
fn overflow_warns_and_continues() {
    let mut diags = Diagnostics::quiet();
    let session = assemble("w.s", "lri(r2, 0x1234)\nadd(r1, r2, r3)", &mut diags).unwrap();

    let warns: Vec<_> = diags.warnings().collect();
    assert_eq!(warns.len(), 1);
    assert_eq!(warns[0].kind, Kind::Warning);
    assert_eq!(warns[0].to_string(), "w.s:1: warning: 0x1234 too big, will truncate");
    assert_eq!(emit::encode_all(session.program()), vec![0x1342, 0x4123]);
}

#[test]
fn syntax_error_is_reported_before_any_warning() {
    let mut diags = Diagnostics::quiet();
    let err = assemble("s.s", "lri(r1, 0x100)\nlri(r1,", &mut diags).unwrap_err();
    assert_eq!(err.pos.line, 2);
    assert!(diags.all().is_empty());
}

#[test]
fn writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.s");
    fs::write(&input, PROGRAM).unwrap();

    let config = Config::new(&input, None, true);
    let mut diags = Diagnostics::quiet();
    s16asm::run(&config, &mut diags).unwrap();

    let bin = fs::read(dir.path().join("prog.o")).unwrap();
    assert_eq!(bin, vec![0x10, 0x51, 0x41, 0x12]);

    let dbg = fs::read_to_string(dir.path().join("prog.dbg")).unwrap();
    let file = input.display().to_string();
    assert_eq!(dbg, format!("{file}:2\n{file}:4\n"));
    assert_eq!(dbg.lines().count() * 2, bin.len());
}

#[test]
fn empty_program_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.s");
    fs::write(&input, "# nothing\n").unwrap();
    let output = dir.path().join("out.bin");

    let config = Config::new(&input, Some(output.as_path()), true);
    s16asm::run(&config, &mut Diagnostics::quiet()).unwrap();

    assert_eq!(fs::read(&output).unwrap().len(), 0);
    assert_eq!(fs::read_to_string(dir.path().join("empty.dbg")).unwrap(), "");
}

#[test]
fn error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.s");
    fs::write(&input, "lri(r1, 5)\nadd(r1, r1, nowhere)\n").unwrap();

    let config = Config::new(&input, None, true);
    let mut diags = Diagnostics::quiet();
    let err = s16asm::run(&config, &mut diags).unwrap_err();

    assert!(matches!(err, Error::Undefined(_)));
    let errors: Vec<String> = diags.errors().map(|d| d.to_string()).collect();
    assert_eq!(
        errors,
        vec![format!("{}:2: error: name `nowhere` is not defined", input.display())]
    );
    assert!(!dir.path().join("bad.o").exists());
    assert!(!dir.path().join("bad.dbg").exists());
}

#[test]
fn failed_debug_write_removes_binary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.s");
    fs::write(&input, PROGRAM).unwrap();
    // a directory where the debug file should go
    fs::create_dir(dir.path().join("prog.dbg")).unwrap();

    let config = Config::new(&input, None, true);
    let err = s16asm::run(&config, &mut Diagnostics::quiet()).unwrap_err();

    assert!(matches!(err, Error::FileWrite(..)));
    assert!(!dir.path().join("prog.o").exists());
}

#[test]
fn wide_literal_is_masked() {
    let mut diags = Diagnostics::quiet();
    let session = assemble("x.s", "lri(r1, 0x100000005)", &mut diags).unwrap();

    let warns: Vec<String> = diags.warnings().map(|d| d.to_string()).collect();
    assert_eq!(warns, vec!["x.s:1: warning: 0x100000005 too big, will truncate"]);
    assert_eq!(emit::encode_all(session.program()), vec![0x1051]);
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.s");
    let config = Config::new(&input, None, false);
    let mut diags = Diagnostics::quiet();

    let err = s16asm::run(&config, &mut diags).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert!(diags.all().is_empty());
    assert!(!dir.path().join("nope.o").exists());
}
