//! CLI tests
//!
//! Command handlers run in-process against a memory-backed catalog; a few
//! end-to-end checks drive the compiled binary against a temp data dir.

use std::fs;
use std::process::Command;

use reelmark::catalog::{CatalogStore, Category};
use reelmark::cli::Commands;
use reelmark::config::StaticConfig;
use reelmark::interfaces::cli::{CliError, run_cli_command};
use reelmark::storage::MemoryKvStore;
use tempfile::TempDir;

fn memory_store() -> CatalogStore {
    CatalogStore::load(Box::new(MemoryKvStore::new()), "movies")
}

fn add(store: &mut CatalogStore, title: &str, link: &str, category: Category) {
    run_cli_command(
        Commands::Add {
            title: title.to_string(),
            link: link.to_string(),
            category,
            description: String::new(),
        },
        store,
        &StaticConfig::default(),
    )
    .expect("add should succeed");
}

#[cfg(test)]
mod in_process_tests {
    use super::*;

    #[test]
    fn test_add_trims_and_stores() {
        let mut store = memory_store();
        add(&mut store, "  Alpha  ", " https://example.com/a.m3u8 ", Category::Action);

        let record = &store.records()[0];
        assert_eq!(record.title, "Alpha");
        assert_eq!(record.link, "https://example.com/a.m3u8");
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut store = memory_store();
        let result = run_cli_command(
            Commands::Add {
                title: "   ".to_string(),
                link: "https://example.com/a.mp4".to_string(),
                category: Category::Other,
                description: String::new(),
            },
            &mut store,
            &StaticConfig::default(),
        );

        assert!(matches!(result, Err(CliError::CommandError(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_dangerous_link() {
        let mut store = memory_store();
        let result = run_cli_command(
            Commands::Add {
                title: "Evil".to_string(),
                link: "javascript:alert(1)".to_string(),
                category: Category::Other,
                description: String::new(),
            },
            &mut store,
            &StaticConfig::default(),
        );

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_an_error() {
        let mut store = memory_store();
        let result = run_cli_command(
            Commands::Remove { id: 404 },
            &mut store,
            &StaticConfig::default(),
        );
        match result {
            Err(CliError::CommandError(msg)) => assert!(msg.contains("404")),
            other => panic!("expected CommandError, got {:?}", other),
        }
    }

    #[test]
    fn test_update_requires_a_change() {
        let mut store = memory_store();
        add(&mut store, "Alpha", "https://example.com/a.mp4", Category::Action);
        let id = store.records()[0].id;

        let result = run_cli_command(
            Commands::Update {
                id,
                title: None,
                link: None,
                category: None,
                description: None,
            },
            &mut store,
            &StaticConfig::default(),
        );
        assert!(result.is_err());

        run_cli_command(
            Commands::Update {
                id,
                title: None,
                link: None,
                category: Some(Category::Documentary),
                description: Some("Behind the scenes".to_string()),
            },
            &mut store,
            &StaticConfig::default(),
        )
        .unwrap();

        let record = store.get(id).unwrap();
        assert_eq!(record.category, Category::Documentary);
        assert_eq!(record.description, "Behind the scenes");
    }

    #[test]
    fn test_list_sets_filter_state() {
        let mut store = memory_store();
        add(&mut store, "Alpha", "https://example.com/a.mp4", Category::Action);
        add(&mut store, "Beta", "https://example.com/b.mp4", Category::Drama);

        run_cli_command(
            Commands::List {
                search: Some("be".to_string()),
                category: "all".parse().unwrap(),
                json: true,
            },
            &mut store,
            &StaticConfig::default(),
        )
        .unwrap();

        assert_eq!(store.search_term(), "be");
        assert_eq!(store.query_count(), 1);
    }

    #[test]
    fn test_export_and_import_files() {
        let temp_dir = TempDir::new().unwrap();
        let export_path = temp_dir.path().join("movies.json");
        let export_path_str = export_path.to_string_lossy().to_string();

        let mut source = memory_store();
        add(&mut source, "Alpha", "https://example.com/a.mp4", Category::Action);
        add(&mut source, "Beta", "https://example.com/b.m3u8", Category::SciFi);

        run_cli_command(
            Commands::Export {
                file_path: Some(export_path_str.clone()),
                stdout: false,
            },
            &mut source,
            &StaticConfig::default(),
        )
        .unwrap();
        assert!(export_path.exists());

        let mut target = memory_store();
        run_cli_command(
            Commands::Import {
                file_path: export_path_str,
            },
            &mut target,
            &StaticConfig::default(),
        )
        .unwrap();

        assert_eq!(target.records(), source.records());
    }

    #[test]
    fn test_import_missing_file() {
        let mut store = memory_store();
        let result = run_cli_command(
            Commands::Import {
                file_path: "/definitely/not/here.json".to_string(),
            },
            &mut store,
            &StaticConfig::default(),
        );
        assert!(matches!(result, Err(CliError::CommandError(_))));
    }

    #[test]
    fn test_import_garbage_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let mut store = memory_store();
        add(&mut store, "Alpha", "https://example.com/a.mp4", Category::Action);

        let result = run_cli_command(
            Commands::Import {
                file_path: path.to_string_lossy().to_string(),
            },
            &mut store,
            &StaticConfig::default(),
        );
        assert!(matches!(result, Err(CliError::ParseError(_))));
        assert_eq!(store.len(), 1);
    }
}

#[cfg(test)]
mod binary_tests {
    use super::*;

    fn reelmark(dir: &TempDir, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_reelmark"))
            .current_dir(dir.path())
            .env("RM__LOGGING__LEVEL", "error")
            .env("NO_COLOR", "1")
            .args(args)
            .output()
            .expect("Failed to execute reelmark")
    }

    #[test]
    fn test_add_list_remove_round_trip() {
        let temp_dir = TempDir::new().unwrap();

        let output = reelmark(
            &temp_dir,
            &["add", "Alpha", "https://example.com/a.m3u8", "-g", "action"],
        );
        assert!(output.status.success(), "{:?}", output);
        assert!(temp_dir.path().join("data").join("movies.json").exists());

        let output = reelmark(&temp_dir, &["list", "--json"]);
        assert!(output.status.success());
        let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let id = listed[0]["id"].as_i64().unwrap();
        assert_eq!(listed[0]["title"], "Alpha");

        let output = reelmark(&temp_dir, &["remove", &id.to_string()]);
        assert!(output.status.success());

        let output = reelmark(&temp_dir, &["remove", &id.to_string()]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_export_stdout_is_clean_json() {
        let temp_dir = TempDir::new().unwrap();
        reelmark(&temp_dir, &["add", "Alpha", "https://example.com/a.mp4"]);

        let output = reelmark(&temp_dir, &["export", "--stdout"]);
        assert!(output.status.success());
        let exported: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(exported.as_array().map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_data_dir_flag() {
        let temp_dir = TempDir::new().unwrap();
        let output = reelmark(
            &temp_dir,
            &["--data-dir", "elsewhere", "add", "Alpha", "https://example.com/a.mp4"],
        );
        assert!(output.status.success());
        assert!(temp_dir.path().join("elsewhere").join("movies.json").exists());
    }
}
