fn main() {
    match loan_qualifier::cli::run() {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("application error: {err}");
            std::process::exit(1);
        }
    }
}
