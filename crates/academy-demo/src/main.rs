#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = academy_demo::run_from_env() {
        eprintln!("academy-venn: {error}");
        std::process::exit(error.exit_code());
    }
}
