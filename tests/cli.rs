use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
    time::{SystemTime, UNIX_EPOCH},
};

const PROMPT: &str = "Input possible formula: ";

fn temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "prop_witness_{name}_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("failed to create directory");
    dir
}

/// A directory holding the default names, predicates, and true atoms files.
fn workspace(name: &str, names: &str, predicates: &str, true_atoms: &str) -> PathBuf {
    let dir = temp_dir(name);
    std::fs::write(dir.join("names.txt"), names).expect("write failure");
    std::fs::write(dir.join("predicates.txt"), predicates).expect("write failure");
    std::fs::write(dir.join("true_atoms.txt"), true_atoms).expect("write failure");
    dir
}

/// Runs the binary in `dir`, with `formula` as standard input.
fn run(dir: &Path, args: &[&str], formula: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_prop_witness"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn");

    let written = child
        .stdin
        .take()
        .expect("missing stdin")
        .write_all(formula);

    // The binary may exit before reading a formula.
    if let Err(e) = written {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);
    }

    child.wait_with_output().expect("failed to wait")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

mod outcomes {

    use super::*;

    #[test]
    fn not_a_formula() {
        let dir = workspace("not_a_formula", "a", "P/1", "");

        for formula in ["[ P(a) and ]", "[ P(a) and Q(a) ]", ""] {
            let output = run(&dir, &[], formula.as_bytes());
            assert_eq!(output.status.code(), Some(0));
            assert_eq!(
                stdout(&output),
                format!("{PROMPT}Possible formula is not a formula.\n")
            );
        }
        assert!(!dir.join("witnesses_satisfiability.txt").exists());
    }

    #[test]
    fn true_in_interpretation() {
        let dir = workspace("true_in_interpretation", "a", "P/1", "");

        let output = run(&dir, &[], b"not P(a)\n");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            format!(
                "{PROMPT}Possible formula is indeed a formula.\nFormula is true in given interpretation.\n"
            )
        );
        assert!(!dir.join("witnesses_satisfiability.txt").exists());
    }

    #[test]
    fn satisfiable() {
        let dir = workspace("satisfiable", "a b", "P/1", "P(c)");

        let output = run(&dir, &[], b"[ P(a) or P(b) ]");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            format!(
                "{PROMPT}Possible formula is indeed a formula.\nFormula is false in given interpretation.\nFormula is satisfiable.\n"
            )
        );

        let witness = std::fs::read_to_string(dir.join("witnesses_satisfiability.txt"))
            .expect("missing witness file");
        assert_eq!(witness, "P(a)\n");
    }

    #[test]
    fn satisfiable_with_model() {
        let dir = workspace("satisfiable_with_model", "a b", "P/1 Q/1", "");
        std::fs::write(dir.join("formula.txt"), "[ [ P(a) and Q(b) ] and not P(b) ]")
            .expect("write failure");

        let output = run(
            &dir,
            &["--formula", "formula.txt", "--witness", "out.txt", "--model"],
            b"",
        );
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).ends_with("v P(a) Q(b)\nFormula is satisfiable.\n"));

        let witness = std::fs::read_to_string(dir.join("out.txt")).expect("missing witness file");
        assert_eq!(witness, "P(a)\nQ(b)\n");
    }

    #[test]
    fn not_satisfiable() {
        let dir = workspace("not_satisfiable", "a", "P/1", "P(a)");

        let output = run(&dir, &[], b"[ P(a) and not P(a) ]");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            format!(
                "{PROMPT}Possible formula is indeed a formula.\nFormula is false in given interpretation.\nFormula is not satisfiable.\n"
            )
        );
        assert!(!dir.join("witnesses_satisfiability.txt").exists());
    }
}

mod failures {

    use super::*;

    #[test]
    fn capacity_exceeded() {
        let dir = workspace("capacity_exceeded", "a", "P/1", "");

        let output = run(&dir, &["--atom-limit", "0"], b"P(a)");
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).ends_with(
            "Formula is false in given interpretation.\nSatisfiability is unknown, Witness error: 1 distinct atoms exceeds the limit of 0.\n"
        ));
        assert!(!dir.join("witnesses_satisfiability.txt").exists());
    }

    #[test]
    fn atom_limit_out_of_bounds() {
        let dir = workspace("atom_limit_out_of_bounds", "a", "P/1", "");

        let output = run(&dir, &["--atom-limit", "64"], b"P(a)");
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "atom_limit requires a value between 0 and 63\n");
    }

    #[test]
    fn missing_files() {
        let dir = temp_dir("missing_files");

        let output = run(&dir, &[], b"P(a)");
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "Could not open names file. Bye!\n");

        std::fs::write(dir.join("names.txt"), "a").expect("write failure");
        std::fs::write(dir.join("predicates.txt"), "P/1").expect("write failure");

        let output = run(&dir, &[], b"P(a)");
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout(&output),
            format!(
                "{PROMPT}Possible formula is indeed a formula.\nCould not open interpretation file. Bye!\n"
            )
        );
    }

    #[test]
    fn deep_nesting() {
        let dir = workspace("deep_nesting", "a", "P/1", "");

        let formula = format!("{}P(a)", "not ".repeat(100_000));
        let output = run(&dir, &[], formula.as_bytes());
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            format!("{PROMPT}Possible formula is not a formula.\n")
        );
    }

    #[test]
    fn invalid_utf8() {
        let dir = workspace("invalid_utf8", "a", "P/1", "");

        let output = run(&dir, &[], &[b'P', b'(', 0xff, b')']);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            format!("{PROMPT}Possible formula is not a formula.\n")
        );
    }
}
