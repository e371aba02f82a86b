//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    let mut cmd = Command::cargo_bin("fibseq").expect("binary not found");
    cmd.env_remove("FIBSEQ_N");
    cmd
}

#[test]
fn help_flag() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn fib_default_index() {
    fibseq()
        .args(["fib", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn fib_each_strategy() {
    for algo in ["naive", "memo", "iterative"] {
        fibseq()
            .args(["fib", "-n", "20", "--algo", algo, "-q"])
            .assert()
            .success()
            .stdout("6765\n");
    }
}

#[test]
fn fib_all_strategies_cross_checked() {
    fibseq()
        .args(["fib", "-n", "5", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NaiveRecursive"))
        .stdout(predicate::str::contains("Memoized"))
        .stdout(predicate::str::contains("Iterative"))
        .stdout(predicate::str::contains("F(5) = 5"));
}

#[test]
fn fib_f0() {
    fibseq()
        .args(["fib", "-n", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn fib_f100_iterative() {
    fibseq()
        .args(["fib", "-n", "100", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn fib_negative_index_rejected() {
    for algo in ["naive", "iterative"] {
        fibseq()
            .args(["fib", "-n", "-1", "--algo", algo])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("invalid argument"));
    }
}

#[test]
fn fib_non_integer_index_rejected() {
    fibseq()
        .args(["fib", "-n", "2.5"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("integer"));
}

#[test]
fn fib_naive_limit_rejected() {
    fibseq()
        .args(["fib", "-n", "30", "--algo", "naive", "--naive-limit", "25"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn fib_all_skips_strategy_over_limit() {
    fibseq()
        .args(["fib", "-n", "60", "--algo", "all", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1548008755920"))
        .stderr(predicate::str::contains("NaiveRecursive"));
}

#[test]
fn fib_invalid_algo() {
    fibseq()
        .args(["fib", "--algo", "matrix"])
        .assert()
        .code(4);
}

#[test]
fn fib_details_mode() {
    fibseq()
        .args(["fib", "-n", "100", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result digits: 21"));
}

#[test]
fn fib_env_var_index() {
    fibseq()
        .env("FIBSEQ_N", "42")
        .args(["fib", "-q"])
        .assert()
        .success()
        .stdout("267914296\n");
}

#[test]
fn fib_output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    fibseq()
        .args(["fib", "-n", "30", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim(), "832040");
}

#[test]
fn range_prints_each_term() {
    fibseq()
        .args(["range", "0", "5", "-q"])
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n");
}

#[test]
fn range_reversed_rejected() {
    fibseq().args(["range", "5", "0"]).assert().code(4);
}

#[test]
fn range_end_above_max_index_rejected() {
    fibseq()
        .args(["range", "10000000000", "10000000000"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the limit of 100000"));
}

#[test]
fn filter_below_one() {
    fibseq()
        .args(["filter", "-q", "--", "3", "1", "2", "-10", "14", "10", "50", "35", "-19"])
        .assert()
        .success()
        .stdout("-10 -19\n");
}

#[test]
fn map_doubles() {
    fibseq()
        .args(["map", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"])
        .assert()
        .success()
        .stdout("map: [2, 4, 6, 8, 10, 12, 14, 16, 18, 20]\n");
}

#[test]
fn reduce_sums() {
    fibseq()
        .args(["reduce", "-q", "1", "2", "10", "-10", "19", "-9", "18", "15"])
        .assert()
        .success()
        .stdout("46\n");
}

#[test]
fn reduce_sums_onto_initial() {
    fibseq()
        .args(["reduce", "-q", "--initial", "100", "1", "2", "10", "-10", "19", "-9", "18", "15"])
        .assert()
        .success()
        .stdout("146\n");
}

#[test]
fn reduce_zeros() {
    fibseq()
        .args(["reduce", "-q", "0", "0", "0"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn reduce_empty_with_initial() {
    fibseq()
        .args(["reduce", "-q", "--initial", "0"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn reduce_empty_without_initial() {
    fibseq()
        .args(["reduce"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty sequence"));
}

#[test]
fn reduce_does_not_overflow() {
    let max = i64::MAX.to_string();
    fibseq()
        .args(["reduce", "-q", &max, &max])
        .assert()
        .success()
        .stdout("18446744073709551614\n");
}

#[test]
fn shell_completion_bash() {
    fibseq()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn shell_completion_zsh() {
    fibseq()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn fib_index_above_max_index_rejected() {
    fibseq()
        .args(["fib", "-n", "100001", "-q"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the limit of 100000"));
}

#[test]
fn fib_recursion_limit_above_ceiling_rejected() {
    fibseq()
        .args(["fib", "-n", "30000", "--algo", "memo", "--recursion-limit", "30000", "-q"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("recursion limit 30000 exceeds the maximum of 5000"));
}

#[test]
fn fib_memo_at_recursion_ceiling() {
    fibseq()
        .args(["fib", "-n", "5000", "--algo", "memo", "--recursion-limit", "5000", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^3878968454[0-9]{1035}\n$").unwrap());
}
