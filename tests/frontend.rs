use std::{
    fs,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use chaincalc::{
    error::SessionError,
    frontend::{
        batch, console,
        mode::Mode,
        sink::{AppendFileSink, ConsoleSink, ResultSink},
    },
};

/// Creates an empty scratch directory unique to this test process.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chaincalc-{}-{name}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap_or_else(|e| panic!("Failed to clear {dir:?}: {e}"));
    }
    fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("Failed to create {dir:?}: {e}"));
    dir
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// A console whose every read fails.
struct BrokenConsole;

impl Read for BrokenConsole {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("terminal went away"))
    }
}

fn try_console(input: &[u8]) -> (Result<(), SessionError>, String) {
    let mut prompt = Vec::new();
    let mut sink = ConsoleSink::new(Vec::new());

    let result = console::run(input, &mut prompt, &mut sink);

    (result, String::from_utf8(sink.into_inner()).unwrap())
}

fn run_console(input: &str) -> (String, String) {
    let mut prompt = Vec::new();
    let mut sink = ConsoleSink::new(Vec::new());

    console::run(input.as_bytes(), &mut prompt, &mut sink).unwrap_or_else(|e| {
                                                                   panic!("Console session failed: {e}")
                                                               });

    (String::from_utf8(prompt).unwrap(), String::from_utf8(sink.into_inner()).unwrap())
}

fn run_batch(input: &Path, output: &Path) -> String {
    let console = batch::run(input, output, Vec::new()).unwrap_or_else(|e| {
                                                             panic!("Batch run failed: {e}")
                                                         });
    String::from_utf8(console).unwrap()
}

#[test]
fn console_answers_each_line() {
    let (prompt, answers) = run_console("add 1 2\nadd 1 2 mul 3\nexit\n");

    assert_eq!(prompt, "-> -> -> ");
    assert_eq!(answers, "-> answer is 3\n-> answer is 9\n");
}

#[test]
fn console_reports_errors_and_continues() {
    let (_, answers) = run_console("add x 2\nfoo 1 2\nadd 1\ndiv 10 0\nEXIT\n");
    let lines: Vec<&str> = answers.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("-> answer is error while converting x to float"));
    assert_eq!(lines[1], "-> answer is command foo is not supported");
    assert!(lines[2].starts_with("-> answer is error: incorrect format."));
    assert_eq!(lines[3], "-> answer is +Inf");
}

#[test]
fn console_exit_matches_anywhere_in_any_case() {
    for stop in ["exit", "EXIT", "Exit", "please eXiT now", "add 1 2 exit"] {
        let (_, answers) = run_console(&format!("add 1 1\n{stop}\nadd 5 5\n"));
        assert_eq!(answers, "-> answer is 2\n", "`{stop}` should end the session");
    }
}

#[test]
fn console_end_of_input_without_exit_is_fatal() {
    let (result, answers) = try_console(b"add 1 2\n");
    match result {
        Err(SessionError::ReadConsole { source }) => {
            assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
        },
        other => panic!("expected a console read error, got {other:?}"),
    }
    assert_eq!(answers, "-> answer is 3\n");

    let (result, answers) = try_console(b"mul 2 3\nsub 1 4");
    assert!(matches!(result, Err(SessionError::ReadConsole { .. })));
    assert_eq!(answers, "-> answer is 6\n");
}

#[test]
fn console_read_failure_is_fatal() {
    let mut prompt = Vec::new();
    let mut sink = ConsoleSink::new(Vec::new());

    let result = console::run(BufReader::new(BrokenConsole), &mut prompt, &mut sink);

    match result {
        Err(SessionError::ReadConsole { source }) => {
            assert_eq!(source.to_string(), "terminal went away");
        },
        other => panic!("expected a console read error, got {other:?}"),
    }
    assert!(sink.into_inner().is_empty());
    assert_eq!(prompt, b"-> ");
}

#[test]
fn console_reports_invalid_utf8_and_continues() {
    let (result, answers) = try_console(b"add \xff 2\nadd 3 4\nexit\n");
    let lines: Vec<&str> = answers.lines().collect();

    assert!(result.is_ok());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "-> answer is error while converting \u{FFFD} to float invalid float literal");
    assert_eq!(lines[1], "-> answer is 7");
}

#[test]
fn batch_writes_one_result_per_line() {
    let dir = scratch_dir("batch-basic");
    let input = dir.join("input.txt");
    let output = dir.join("output.txt");
    write_file(&input, "add 1 2\nadd 1 2 mul 3\ndiv 10 0\nfoo 1 2\n");

    let console = run_batch(&input, &output);

    assert_eq!(read_file(&output), "3\n9\n+Inf\ncommand foo is not supported\n");
    assert_eq!(console,
               "-> add 1 2\n-> answer is 3\n\
                -> add 1 2 mul 3\n-> answer is 9\n\
                -> div 10 0\n-> answer is +Inf\n\
                -> foo 1 2\n-> answer is command foo is not supported\n");
}

#[test]
fn batch_replaces_stale_output() {
    let dir = scratch_dir("batch-stale");
    let input = dir.join("input.txt");
    let output = dir.join("output.txt");

    write_file(&input, "add 1 1\nadd 2 2\n");
    run_batch(&input, &output);
    assert_eq!(read_file(&output), "2\n4\n");

    write_file(&input, "mul 3 3\n");
    run_batch(&input, &output);
    assert_eq!(read_file(&output), "9\n");
}

#[test]
fn batch_with_empty_input_leaves_no_output() {
    let dir = scratch_dir("batch-empty");
    let input = dir.join("input.txt");
    let output = dir.join("output.txt");
    write_file(&input, "");
    write_file(&output, "stale\n");

    let console = run_batch(&input, &output);

    assert!(console.is_empty());
    assert!(!output.exists());
}

#[test]
fn batch_continues_past_invalid_utf8() {
    let dir = scratch_dir("batch-utf8");
    let input = dir.join("input.txt");
    let output = dir.join("output.txt");
    fs::write(&input, b"add 1 2\nadd \xff 2\r\nadd 3 4\n").unwrap();

    let console = run_batch(&input, &output);

    assert_eq!(read_file(&output),
               "3\nerror while converting \u{FFFD} to float invalid float literal\n7\n");
    assert!(console.contains("-> add \u{FFFD} 2\n"));
    assert!(console.ends_with("-> answer is 7\n"));
}

#[test]
fn batch_missing_input_is_fatal() {
    let dir = scratch_dir("batch-missing");
    let result = batch::run(&dir.join("nope.txt"), &dir.join("out.txt"), Vec::new());

    assert!(matches!(result, Err(SessionError::OpenInput { .. })));
}

#[test]
fn batch_falls_back_to_console_when_output_is_unavailable() {
    let dir = scratch_dir("batch-fallback");
    let input = dir.join("input.txt");
    let output = dir.join("taken");
    write_file(&input, "add 1 2\n");
    fs::create_dir(&output).unwrap();

    let console = run_batch(&input, &output);
    let lines: Vec<&str> = console.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "-> add 1 2");
    assert!(lines[1].starts_with("error while opening or creating output file"));
    assert_eq!(lines[2], "-> answer is 3");
    assert!(output.is_dir());
}

#[test]
fn append_sink_appends_and_echoes() {
    let dir = scratch_dir("sink");
    let output = dir.join("out.txt");
    write_file(&output, "1\n");

    let mut sink = AppendFileSink::new(&output, Vec::new());
    sink.record(&Ok(2.5)).unwrap();
    sink.record(&chaincalc::calc_line("bad")).unwrap();

    assert!(read_file(&output).starts_with("1\n2.5\nerror: incorrect format."));
    let console = String::from_utf8(sink.into_inner()).unwrap();
    assert!(console.starts_with("-> answer is 2.5\n-> answer is error: incorrect format."));
}

#[test]
fn mode_selection() {
    let dir = scratch_dir("mode");
    let input = dir.join("input.txt");
    write_file(&input, "add 1 2\n");
    let input_arg = input.display().to_string();
    let output_arg = dir.join("out.txt").display().to_string();

    assert_eq!(Mode::from_args(&[input_arg.clone(), output_arg.clone()]),
               Mode::Batch { input:  input.clone(),
                             output: dir.join("out.txt"), });

    assert_eq!(Mode::from_args(&[]), Mode::Console);
    assert_eq!(Mode::from_args(std::slice::from_ref(&input_arg)), Mode::Console);
    assert_eq!(Mode::from_args(&[input_arg.clone(), output_arg.clone(), "extra".to_string()]),
               Mode::Console);
    assert_eq!(Mode::from_args(&["-".to_string(), output_arg.clone()]), Mode::Console);
    assert_eq!(Mode::from_args(&[dir.join("missing.txt").display().to_string(), output_arg.clone()]),
               Mode::Console);
    assert_eq!(Mode::from_args(&[dir.display().to_string(), output_arg]), Mode::Console);
}

#[cfg(unix)]
#[test]
fn batch_unreadable_input_is_fatal() {
    let dir = scratch_dir("batch-unreadable");

    let result = batch::run(&dir, &dir.join("out.txt"), Vec::new());

    assert!(matches!(result, Err(SessionError::ReadInput { path, .. }) if path == dir));
}

#[cfg(unix)]
#[test]
fn undeletable_stale_output_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir("stale-locked");
    let locked = dir.join("locked");
    fs::create_dir(&locked).unwrap();
    let input = dir.join("input.txt");
    let output = locked.join("out.txt");
    write_file(&input, "add 1 2\n");
    write_file(&output, "stale\n");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
    // Directory permissions do not bind the superuser.
    let enforced = fs::File::create(locked.join("write-check")).is_err();

    let removed = batch::remove_stale_output(&output);
    let ran = batch::run(&input, &output, Vec::new());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if enforced {
        assert!(matches!(removed, Err(SessionError::RemoveOutput { path, .. }) if path == output));
        assert!(matches!(ran, Err(SessionError::RemoveOutput { .. })));
        assert_eq!(read_file(&output), "stale\n");
    }
}
