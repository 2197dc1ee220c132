// Integration tests for the theme pipeline, driven by a stub converter script

#[cfg(all(test, unix))]
mod tests {
    use crate::event::{RunMsg, ThemeSummary};
    use crate::model::{CursorMapping, Role};
    use crate::pipeline::converter::{ConvertError, ExternalConverter};
    use crate::pipeline_worker::PipelineWorker;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::{TempDir, tempdir};

    // Writing a script while another test forks can leave it busy (ETXTBSY)
    static PROCESS_LOCK: Mutex<()> = Mutex::new(());

    // Mimics `win2xcur [opts] -o OUT FILE`: writes OUT/<stem>.
    // Stems containing "broken" fail, stems containing "empty" write nothing.
    const STUB: &str = r#"#!/bin/sh
if [ "$1" = "--help" ]; then
    exit 0
fi
while [ "$#" -gt 0 ] && [ "$1" != "-o" ]; do
    shift
done
out="$2"
name=$(basename "$3")
name="${name%.*}"
case "$name" in
    *broken*) echo "cannot parse $name" >&2; exit 3 ;;
    *empty*) exit 0 ;;
esac
printf 'converted:%s' "$name" > "$out/$name"
"#;

    struct Fixture {
        _guard: MutexGuard<'static, ()>,
        root: TempDir,
        stub: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let guard = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let root = tempdir().unwrap();
            let stub = root.path().join("fake-win2xcur");
            fs::write(&stub, STUB).unwrap();
            fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
            fs::create_dir_all(root.path().join("input")).unwrap();
            Self {
                _guard: guard,
                root,
                stub,
            }
        }

        fn input(&self) -> PathBuf {
            self.root.path().join("input")
        }

        fn output(&self) -> PathBuf {
            self.root.path().join("output")
        }

        fn theme(&self, name: &str) -> PathBuf {
            let dir = self.input().join(name);
            fs::create_dir_all(&dir).unwrap();
            dir
        }

        fn worker(&self) -> PipelineWorker {
            PipelineWorker::new(ExternalConverter::new(&self.stub), CursorMapping::default())
        }

        fn run(&self, worker: &PipelineWorker) -> (Vec<ThemeSummary>, Vec<RunMsg>) {
            let mut msgs = Vec::new();
            let summaries = worker
                .run(&self.input(), &self.output(), &mut |m| msgs.push(m))
                .unwrap();
            (summaries, msgs)
        }
    }

    fn write_cursor(dir: &Path, name: &str) {
        let data: &[u8] = if name.to_lowercase().ends_with(".ani") {
            b"RIFF\x04\x00\x00\x00ACON"
        } else {
            b"\x00\x00\x02\x00\x01\x00"
        };
        fs::write(dir.join(name), data).unwrap();
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_single_default_cursor_end_to_end() {
        let fx = Fixture::new();
        write_cursor(&fx.theme("Oxy"), "normal.cur");

        let (summaries, msgs) = fx.run(&fx.worker());

        let cursors = fx.output().join("Oxy").join("cursors");
        assert_eq!(
            listing(&cursors),
            vec![
                "arrow",
                "default",
                "left_ptr",
                "size-bdiag",
                "size-fdiag",
                "size-hor",
                "size-ver",
                "top_left_arrow"
            ]
        );
        assert_eq!(
            fs::read_to_string(cursors.join("left_ptr")).unwrap(),
            "converted:normal"
        );

        let index = fs::read_to_string(fx.output().join("Oxy").join("index.theme")).unwrap();
        assert_eq!(
            index,
            "[Icon Theme]\nName=Oxy\nComment=Converted Windows cursor theme: Oxy\nInherits=core\n"
        );

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].converted, 1);
        assert_eq!(summaries[0].total, 1);
        assert!(msgs.contains(&RunMsg::RunStarted(1)));
        assert!(msgs.contains(&RunMsg::RunCompleted(fx.output())));
    }

    #[test]
    fn test_theme_without_cursors_reports_zero_of_zero() {
        let fx = Fixture::new();
        let theme = fx.theme("Empty");
        fs::write(theme.join("readme.txt"), "nothing here").unwrap();

        let (summaries, msgs) = fx.run(&fx.worker());

        let out = fx.output().join("Empty");
        assert!(listing(&out.join("cursors")).is_empty());
        assert!(out.join("index.theme").is_file());
        assert_eq!(summaries[0].converted, 0);
        assert_eq!(summaries[0].total, 0);
        assert!(msgs.contains(&RunMsg::NoCursorFiles("Empty".to_string())));
        assert!(msgs.iter().any(|m| matches!(
            m,
            RunMsg::ThemeCompleted(s) if s.converted == 0 && s.total == 0
        )));
    }

    #[test]
    fn test_descriptor_association_beats_file_name() {
        let fx = Fixture::new();
        let theme = fx.theme("Scheme");
        write_cursor(&theme, "busy.cur");
        fs::write(
            theme.join("install.inf"),
            "[Strings]\r\nSCHEME_NAME = \"Scheme\"\r\npointer = \"busy.cur\"\r\n",
        )
        .unwrap();

        let (_, msgs) = fx.run(&fx.worker());

        let cursors = fx.output().join("Scheme").join("cursors");
        assert!(cursors.join("left_ptr").exists());
        assert!(!cursors.join("watch").exists());
        assert!(msgs.contains(&RunMsg::DescriptorFound(theme.join("install.inf"))));
    }

    #[test]
    fn test_later_file_wins_alias_collision() {
        let fx = Fixture::new();
        let theme = fx.theme("Dupes");
        // .cur files are converted before .ani files
        write_cursor(&theme, "arrow.ani");
        write_cursor(&theme, "normal.cur");

        let (summaries, msgs) = fx.run(&fx.worker());

        let cursors = fx.output().join("Dupes").join("cursors");
        assert_eq!(
            fs::read_to_string(cursors.join("left_ptr")).unwrap(),
            "converted:arrow"
        );
        assert_eq!(listing(&cursors).len(), 8);
        assert_eq!(summaries[0].converted, 2);
        assert!(!msgs.iter().any(|m| matches!(m, RunMsg::ConversionFailed { .. })));
    }

    #[test]
    fn test_failures_are_per_file() {
        let fx = Fixture::new();
        let theme = fx.theme("Mixed");
        write_cursor(&theme, "broken_text.cur");
        write_cursor(&theme, "empty_busy.cur");
        write_cursor(&theme, "normal.cur");
        write_cursor(&theme, "zzz.cur");

        let (summaries, msgs) = fx.run(&fx.worker());

        let summary = &summaries[0];
        assert_eq!(summary.total, 4);
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.skipped, 1);

        let failed: Vec<&str> = msgs
            .iter()
            .filter_map(|m| match m {
                RunMsg::ConversionFailed { file, .. } => Some(file.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(failed, vec!["broken_text.cur", "empty_busy.cur"]);
        assert!(msgs.contains(&RunMsg::Unresolved("zzz.cur".to_string())));

        let cursors = fx.output().join("Mixed").join("cursors");
        assert!(cursors.join("left_ptr").exists());
        assert!(!cursors.join("xterm").exists());
        assert!(!cursors.join("watch").exists());
        assert!(fx.output().join("Mixed").join("index.theme").exists());
    }

    #[test]
    fn test_unwritable_theme_output_does_not_stop_run() {
        let fx = Fixture::new();
        write_cursor(&fx.theme("Blocked"), "normal.cur");
        write_cursor(&fx.theme("Oxy"), "normal.cur");
        fs::create_dir_all(fx.output()).unwrap();
        fs::write(fx.output().join("Blocked"), "not a directory").unwrap();

        let (summaries, msgs) = fx.run(&fx.worker());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Oxy");
        assert!(fx.output().join("Oxy").join("cursors").join("left_ptr").exists());
        assert!(msgs.iter().any(|m| matches!(
            m,
            RunMsg::Warning(text) if text.contains("Blocked")
        )));
        assert!(msgs.contains(&RunMsg::RunCompleted(fx.output())));
    }

    #[test]
    fn test_empty_alias_list_is_no_mapping() {
        let fx = Fixture::new();
        write_cursor(&fx.theme("Bare"), "text.cur");

        let mut mapping = CursorMapping::default();
        mapping.set_aliases(Role::Text, Vec::new());
        let worker = PipelineWorker::new(ExternalConverter::new(&fx.stub), mapping);

        let (summaries, msgs) = fx.run(&worker);
        assert_eq!(summaries[0].skipped, 1);
        assert!(msgs.contains(&RunMsg::NoMapping {
            file: "text.cur".to_string(),
            role: Role::Text,
        }));
    }

    #[test]
    fn test_unparsable_output_is_a_warning_only() {
        let fx = Fixture::new();
        fs::write(fx.theme("Odd").join("help.cur"), b"not a cursor").unwrap();

        let (summaries, msgs) = fx.run(&fx.worker());

        assert_eq!(summaries[0].converted, 1);
        let warnings = msgs
            .iter()
            .filter(|m| matches!(m, RunMsg::Warning(_)))
            .count();
        // bad input header, then non-Xcursor output
        assert_eq!(warnings, 2);
    }

    #[test]
    fn test_missing_input_dir_is_created() {
        let fx = Fixture::new();
        fs::remove_dir_all(fx.input()).unwrap();

        let (summaries, msgs) = fx.run(&fx.worker());

        assert!(summaries.is_empty());
        assert!(fx.input().is_dir());
        assert!(!fx.output().exists());
        assert_eq!(msgs, vec![RunMsg::InputDirCreated(fx.input())]);
    }

    #[test]
    fn test_input_without_themes() {
        let fx = Fixture::new();
        fs::write(fx.input().join("loose.cur"), b"").unwrap();

        let (summaries, msgs) = fx.run(&fx.worker());

        assert!(summaries.is_empty());
        assert!(fx.output().is_dir());
        assert_eq!(msgs, vec![RunMsg::NoThemes(fx.input())]);
    }

    #[test]
    fn test_install_copies_theme() {
        let fx = Fixture::new();
        write_cursor(&fx.theme("Oxy"), "normal.cur");
        let icons = fx.root.path().join("icons");

        let worker = fx.worker().with_inherits("Adwaita").with_install_dir(&icons);
        let (_, msgs) = fx.run(&worker);

        let installed = icons.join("Oxy");
        assert!(installed.join("cursors").join("arrow").exists());
        let index = fs::read_to_string(installed.join("index.theme")).unwrap();
        assert!(index.contains("Inherits=Adwaita"));
        assert!(msgs.contains(&RunMsg::ThemeInstalled {
            name: "Oxy".to_string(),
            path: installed,
        }));
    }

    #[test]
    fn test_converter_check() {
        let fx = Fixture::new();
        assert!(ExternalConverter::new(&fx.stub).check().is_ok());

        let missing = ExternalConverter::new(fx.root.path().join("no-such-tool"));
        assert!(matches!(
            missing.check(),
            Err(ConvertError::ConverterMissing { .. })
        ));
    }
}
