use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("mensura")
        .version("1.0.0")
        .author("Mensura Contributors")
        .about("Compute text metrics for batches of web articles")
        .arg(clap::arg!(<INPUT> "Input table with URL_ID and URL columns"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file")
                .value_name("FILE")
                .default_value("output.csv")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (csv, json)")
                .value_name("FORMAT")
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(
            clap::arg!(--positive_words <FILE> "Positive sentiment word list")
                .default_value("positive-words.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--negative_words <FILE> "Negative sentiment word list")
                .default_value("negative-words.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--stopwords <FILE> "Stop-word files, merged into one set")
                .num_args(1..)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "mensura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "mensura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "mensura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "mensura", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
