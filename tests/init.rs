#[cfg(test)]
mod tests {
    use std::fs;
    use stunden::commands::init::{self, InitArgs};
    use stunden::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the home/appdata directory at a temporary directory.
    ///
    /// This binary holds a single test, so no other test changes `HOME` mid-run.
    struct InitTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for InitTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            InitTestContext { temp_dir }
        }
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_writes_and_deletes_config(ctx: &mut InitTestContext) {
        let path = Config::path().unwrap();
        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(!path.exists());

        init::cmd(InitArgs { delete: false }).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
        assert_eq!(Config::read().unwrap(), Config::default());

        // Existing output sections survive a second init.
        fs::write(&path, r#"{"outputs":{"text":{"kept":true}}}"#).unwrap();
        init::cmd(InitArgs { delete: false }).unwrap();
        assert!(Config::read().unwrap().output_config("text").is_some());

        init::cmd(InitArgs { delete: true }).unwrap();
        assert!(!path.exists());

        // Nothing left to remove: warns and still succeeds.
        init::cmd(InitArgs { delete: true }).unwrap();
        assert!(!path.exists());
    }
}
