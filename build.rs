fn main() {
    println!("cargo:rerun-if-env-changed=CHATFOLD_BUILD_DATE");
    println!("cargo:rerun-if-env-changed=CHATFOLD_BUILD_SHA");

    let version = match (
        std::env::var("CHATFOLD_BUILD_DATE").ok(),
        std::env::var("CHATFOLD_BUILD_SHA").ok(),
    ) {
        (Some(date), Some(sha)) => format!("{date} ({sha})"),
        _ => "dev".to_string(),
    };

    println!("cargo:rustc-env=CHATFOLD_VERSION={version}");
}
