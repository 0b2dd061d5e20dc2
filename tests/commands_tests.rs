use std::path::{Path, PathBuf};

use deplist::cli::commands::run_with_config;
use deplist::cli::config::{CommandName, RunConfig};
use deplist::core::types::Mode;
use deplist::sources::wordlists::{WordlistCatalog, WordlistSource};
use httpmock::prelude::*;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn base_config(mode: Mode, dir: &Path) -> RunConfig {
    RunConfig {
        command: CommandName::Run(mode),
        domain: "example.com".to_string(),
        list: None,
        wordlist: None,
        download: None,
        output: None,
        print: false,
        depth: 3,
        strip_domain: true,
        progress: false,
        max_candidates: 1_000_000,
        timeout_ms: 2000,
        user_agent: "deplist-test".to_string(),
        wordlist_dir: dir.join("wordlists"),
        catalog: WordlistCatalog::default(),
    }
}

fn read_output(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn wordlist_mode_writes_extracted_words() {
    let dir = temp_dir("deplist_cmd_wordlist");
    let list = dir.join("subs.txt");
    std::fs::write(
        &list,
        "api.dev.example.com\n\nwww.example.com\nhttps://shop.example.com/cart?item=2\n",
    )
    .unwrap();

    let mut cfg = base_config(Mode::Wordlist, &dir);
    cfg.list = Some(list);
    cfg.output = Some(dir.join("words.txt"));

    let summary = run_with_config(&cfg).await.unwrap();

    assert_eq!(summary.saved_to, Some(dir.join("words.txt")));
    assert_eq!(
        read_output(&dir.join("words.txt")),
        vec!["api", "cart", "com", "dev", "example", "item", "shop", "www"]
    );
    assert_eq!(summary.generated, 8);
}

#[tokio::test]
async fn subdomains_from_wordlist_file() {
    let dir = temp_dir("deplist_cmd_subdomains");
    let words = dir.join("words.txt");
    std::fs::write(&words, "api\nwww\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.wordlist = Some(words);
    cfg.depth = 2;
    cfg.output = Some(dir.join("out.txt"));

    let summary = run_with_config(&cfg).await.unwrap();

    assert_eq!(summary.generated, 6);
    assert_eq!(
        read_output(&dir.join("out.txt")),
        vec![
            "api.example.com",
            "www.example.com",
            "api.api.example.com",
            "api.www.example.com",
            "www.api.example.com",
            "www.www.example.com",
        ]
    );
}

#[tokio::test]
async fn list_takes_precedence_over_wordlist() {
    let dir = temp_dir("deplist_cmd_precedence");
    let list = dir.join("subs.txt");
    let words = dir.join("words.txt");
    std::fs::write(&list, "mail.example.com\n").unwrap();
    std::fs::write(&words, "ignored\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.list = Some(list);
    cfg.wordlist = Some(words);
    cfg.depth = 1;
    cfg.output = Some(dir.join("out.txt"));

    run_with_config(&cfg).await.unwrap();
    assert_eq!(read_output(&dir.join("out.txt")), vec!["mail.example.com"]);
}

#[tokio::test]
async fn subdomains_from_list_drop_base_domain_labels() {
    let dir = temp_dir("deplist_cmd_list_strip");
    let list = dir.join("subs.txt");
    std::fs::write(&list, "api.example.com\nwww.example.com\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.list = Some(list);
    cfg.depth = 1;
    cfg.output = Some(dir.join("out.txt"));

    run_with_config(&cfg).await.unwrap();
    let out = read_output(&dir.join("out.txt"));
    assert_eq!(out, vec!["api.example.com", "www.example.com"]);
    assert!(!out.iter().any(|c| c == "example.example.com" || c == "com.example.com"));
}

#[tokio::test]
async fn keep_domain_retains_base_labels() {
    let dir = temp_dir("deplist_cmd_keep_domain");
    let list = dir.join("subs.txt");
    std::fs::write(&list, "api.example.com\n").unwrap();

    let mut cfg = base_config(Mode::Wordlist, &dir);
    cfg.list = Some(list);
    cfg.strip_domain = false;
    cfg.output = Some(dir.join("words.txt"));

    run_with_config(&cfg).await.unwrap();
    assert_eq!(read_output(&dir.join("words.txt")), vec!["api", "com", "example"]);
}

#[tokio::test]
async fn subdomains_without_input_is_an_error() {
    let dir = temp_dir("deplist_cmd_noinput");
    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.output = Some(dir.join("out.txt"));

    assert!(run_with_config(&cfg).await.is_err());
    assert!(!dir.join("out.txt").exists());
}

#[tokio::test]
async fn missing_input_file_is_an_error() {
    let dir = temp_dir("deplist_cmd_missing");
    let mut cfg = base_config(Mode::Wordlist, &dir);
    cfg.list = Some(dir.join("absent.txt"));

    assert!(run_with_config(&cfg).await.is_err());
}

#[tokio::test]
async fn candidate_limit_is_enforced_before_generation() {
    let dir = temp_dir("deplist_cmd_limit");
    let words = dir.join("words.txt");
    std::fs::write(&words, "a\nb\nc\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.wordlist = Some(words);
    cfg.depth = 3;
    cfg.max_candidates = 47;
    cfg.output = Some(dir.join("out.txt"));

    // 3 * 4 * 4 = 48
    assert!(run_with_config(&cfg).await.is_err());
    assert!(!dir.join("out.txt").exists());

    cfg.max_candidates = 48;
    let summary = run_with_config(&cfg).await.unwrap();
    assert_eq!(summary.generated, 48);
}

#[tokio::test]
async fn no_output_target_generates_nothing() {
    let dir = temp_dir("deplist_cmd_nooutput");
    let words = dir.join("words.txt");
    std::fs::write(&words, "a\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.wordlist = Some(words);

    let summary = run_with_config(&cfg).await.unwrap();
    assert_eq!(summary.generated, 0);
    assert!(summary.saved_to.is_none());
}

#[tokio::test]
async fn unwritable_output_is_reported_not_fatal() {
    let dir = temp_dir("deplist_cmd_unwritable");
    let words = dir.join("words.txt");
    std::fs::write(&words, "a\n").unwrap();

    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.wordlist = Some(words);
    cfg.depth = 1;
    // a directory cannot be opened as the output file
    cfg.output = Some(dir.clone());

    let summary = run_with_config(&cfg).await.unwrap();
    assert_eq!(summary.generated, 1);
    assert!(summary.saved_to.is_none());
}

#[tokio::test]
async fn downloaded_wordlist_feeds_permutations() {
    let server = MockServer::start();
    let hit = server.mock(|when, then| {
        when.method(GET).path("/team.txt");
        then.status(200).body("vpn\n\nsso\n");
    });

    let dir = temp_dir("deplist_cmd_download");
    let mut cfg = base_config(Mode::Subdomains, &dir);
    cfg.catalog = WordlistCatalog::with_extra(&[WordlistSource {
        name: "team".into(),
        url: server.url("/team.txt").into(),
        description: "".into(),
    }]);
    cfg.download = Some("team".to_string());
    cfg.depth = 1;
    cfg.output = Some(dir.join("out.txt"));

    run_with_config(&cfg).await.unwrap();

    hit.assert();
    assert!(dir.join("wordlists").join("team.txt").exists());
    assert_eq!(
        read_output(&dir.join("out.txt")),
        vec!["vpn.example.com", "sso.example.com"]
    );
}
