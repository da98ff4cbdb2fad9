//! Tests for command-line parsing and the end-to-end label job

#[cfg(test)]
mod tests {
    use clap::Parser;
    use labelgrid::LabelError;
    use labelgrid::io::cli::{Cli, JobSummary, LabelJob, sheet_path};
    use labelgrid::io::configuration::{DEFAULT_DELIMITER, DEFAULT_FONT_SIZE, PRINT_NOTICE};
    use labelgrid::sheet::profile::GridProfile;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run_job(args: &[&str], answers: &str) -> (labelgrid::Result<JobSummary>, String) {
        let cli = Cli::parse_from(args);
        let mut output = Vec::new();
        let result = LabelJob::new(cli).run_with(Cursor::new(answers.to_string()), &mut output);
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    // Tests parsing with no arguments uses the defaults
    // Verified by changing default values
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["labelgrid"]);

        assert_eq!(cli.output, None);
        assert_eq!(cli.profile, GridProfile::FiveBySeventeen);
        assert_eq!(cli.delimiter, DEFAULT_DELIMITER);
        assert!((cli.font_size - DEFAULT_FONT_SIZE).abs() < f32::EPSILON);
        assert!(cli.exclude.is_empty());
        assert!(!cli.interactive);
        assert!(!cli.batch);
        assert!(!cli.preview);
        assert!(!cli.has_categories());
        assert!(cli.should_show_progress());
    }

    // Tests parsing with all available arguments
    // Verified by swapping the line1 and line2 fields
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "labelgrid",
            "--output",
            "plates",
            "--line1",
            "GP01,GP02",
            "--line1",
            "d1,d2",
            "--line2",
            "NW",
            "--profile",
            "6x21",
            "--delimiter",
            "-",
            "--font-size",
            "6.5",
            "--exclude",
            "0=A01",
            "--interactive",
            "--preview",
            "--quiet",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("plates")));
        assert_eq!(cli.line1, vec!["GP01,GP02", "d1,d2"]);
        assert_eq!(cli.line2, vec!["NW"]);
        assert!(cli.line3.is_empty());
        assert_eq!(cli.profile, GridProfile::SixByTwentyOne);
        assert_eq!(cli.delimiter, "-");
        assert!((cli.font_size - 6.5).abs() < f32::EPSILON);
        assert_eq!(cli.exclude, vec!["0=A01"]);
        assert!(cli.interactive && cli.preview && cli.quiet);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.geometry().cols, 6);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "labelgrid", "-o", "out", "-p", "6x21", "-d", "_", "-s", "10", "-x", "1=C", "-i", "-q",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.profile, GridProfile::SixByTwentyOne);
        assert_eq!(cli.delimiter, "_");
        assert!((cli.font_size - 10.0).abs() < f32::EPSILON);
        assert_eq!(cli.exclude, vec!["1=C"]);
        assert!(cli.interactive);
        assert!(cli.quiet);
    }

    // Tests unknown profiles are rejected by the parser
    // Verified by accepting free-form profile names
    #[test]
    fn test_cli_rejects_unknown_profile() {
        assert!(Cli::try_parse_from(["labelgrid", "--profile", "4x10"]).is_err());
    }

    // Tests command-line categories build the label spec per line
    // Verified by adding every category to line one
    #[test]
    fn test_label_spec_from_lines() {
        let cli = Cli::parse_from(["labelgrid", "--line1", "a,b", "--line3", "x"]);
        let spec = cli.label_spec();

        assert!(cli.has_categories());
        assert_eq!(spec.line(0).unwrap().categories().len(), 1);
        assert!(spec.line(1).unwrap().is_empty());
        assert_eq!(spec.line(2).unwrap().categories()[0].values(), ["x"]);
    }

    // Tests sheet files are named after the base with the sheet index
    // Verified by dropping the sheet index
    #[test]
    fn test_sheet_path() {
        assert_eq!(
            sheet_path(Path::new("plates"), 0, "pdf"),
            PathBuf::from("plates-0.pdf")
        );
        assert_eq!(
            sheet_path(Path::new("out/run"), 12, "png"),
            PathBuf::from("out/run-12.png")
        );
    }

    // Tests a full run writes one PDF per sheet and the print notice
    // Verified by returning before rendering
    #[test]
    fn test_run_writes_sheets() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("plates");
        let base_arg = base.to_string_lossy().into_owned();

        // 3 x 2 x 15 = 90 labels on 85-cell sheets
        let (result, output) = run_job(
            &[
                "labelgrid",
                "-q",
                "-b",
                "-o",
                &base_arg,
                "--line1",
                "GP01,GP02,GP03",
                "--line2",
                "d1,d2",
                "--line3",
                "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15",
                "--preview",
            ],
            "",
        );

        let summary = result.unwrap();
        assert_eq!(summary.labels, 90);
        assert_eq!(summary.documents.len(), 2);
        assert_eq!(summary.previews.len(), 2);
        assert!(output.contains(PRINT_NOTICE));
        for sheet in 0..2 {
            assert!(sheet_path(&base, sheet, "pdf").is_file());
            assert!(sheet_path(&base, sheet, "png").is_file());
        }
        assert!(!sheet_path(&base, 2, "pdf").exists());
    }

    // Tests a run without arguments prompts for the name, the categories and each sheet's used cells
    // Verified by skipping the exclusion screen unless -i is given
    #[test]
    fn test_run_prompts_for_missing_inputs() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("prompted");
        let answers = format!("{}\na,b\n\nx\n\n\nA01\n\n", base.display());

        let (result, output) = run_job(&["labelgrid", "-q"], &answers);

        let summary = result.unwrap();
        assert_eq!(summary.labels, 2);
        assert_eq!(summary.documents, vec![sheet_path(&base, 0, "pdf")]);
        assert!(output.contains("Enter output filename:"));
        assert!(output.contains("Line 1, category 1: "));
        assert!(output.contains("Line 3, category 1: "));
        assert!(output.contains("Sheet 0: select labels that are already used"));
        assert!(sheet_path(&base, 0, "pdf").is_file());
    }

    // Tests when the exclusion screen is shown
    // Verified by ignoring presets in asks_exclusions
    #[test]
    fn test_asks_exclusions() {
        assert!(Cli::parse_from(["labelgrid"]).asks_exclusions());
        assert!(!Cli::parse_from(["labelgrid", "--batch"]).asks_exclusions());
        assert!(!Cli::parse_from(["labelgrid", "-x", "0=A01"]).asks_exclusions());
        assert!(Cli::parse_from(["labelgrid", "-x", "0=A01", "-i"]).asks_exclusions());
        assert!(Cli::try_parse_from(["labelgrid", "-b", "-i"]).is_err());
    }

    // Tests batch runs never read exclusions from the terminal
    // Verified by prompting regardless of --batch
    #[test]
    fn test_run_batch_skips_exclusion_screen() {
        let dir = TempDir::new().unwrap();
        let base_arg = dir.path().join("batch").to_string_lossy().into_owned();

        let (result, output) = run_job(&["labelgrid", "-q", "-b", "-o", &base_arg, "--line1", "a"], "");

        assert_eq!(result.unwrap().documents.len(), 1);
        assert!(!output.contains("select labels that are already used"));
    }

    // Tests interactive exclusions are collected before each sheet
    // Verified by filling sheets without asking
    #[test]
    fn test_run_interactive() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("picked");
        let base_arg = base.to_string_lossy().into_owned();

        let (result, output) = run_job(
            &["labelgrid", "-q", "-i", "-o", &base_arg, "--line1", "a,b,c"],
            "A01 B\n\n",
        );

        assert_eq!(result.unwrap().documents.len(), 1);
        assert!(output.contains("Sheet 0: select labels that are already used"));
        assert!(output.contains(PRINT_NOTICE));
    }

    // Tests exiting the exclusion prompt cancels the run
    // Verified by treating exit as submit
    #[test]
    fn test_run_interactive_exit() {
        let dir = TempDir::new().unwrap();
        let base_arg = dir.path().join("gone").to_string_lossy().into_owned();

        let (result, _) = run_job(
            &["labelgrid", "-q", "-i", "-o", &base_arg, "--line1", "a"],
            "exit\n",
        );

        assert!(matches!(result, Err(LabelError::Cancelled)));
    }

    // Tests repeated values collapse into one label and one sheet
    // Verified by placing the raw product instead of distinct labels
    #[test]
    fn test_run_deduplicates_labels() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("dupes");
        let base_arg = base.to_string_lossy().into_owned();

        let (result, _) = run_job(
            &["labelgrid", "-q", "-b", "-o", &base_arg, "--line1", "a,a,a", "--line2", "b,b"],
            "",
        );

        let summary = result.unwrap();
        assert_eq!(summary.labels, 1);
        assert_eq!(summary.documents.len(), 1);
        assert!(summary.previews.is_empty());
        assert!(!sheet_path(&base, 0, "png").exists());
    }

    // Tests a non-positive font size is rejected before anything is written
    // Verified by removing the font size check
    #[test]
    fn test_run_rejects_bad_font_size() {
        let (result, _) = run_job(&["labelgrid", "-q", "-o", "x", "-s", "0", "--line1", "a"], "");

        assert!(matches!(
            result,
            Err(LabelError::InvalidParameter {
                parameter: "font-size",
                ..
            })
        ));
    }

    // Tests preset exclusions fully covering a sheet fail the run
    // Verified by retrying presets like the interactive prompt
    #[test]
    fn test_run_preset_full_sheet_fails() {
        let dir = TempDir::new().unwrap();
        let base_arg = dir.path().join("full").to_string_lossy().into_owned();
        let columns = "0=A,B,C,D,E";

        let (result, _) = run_job(
            &["labelgrid", "-q", "-o", &base_arg, "-x", columns, "--line1", "a"],
            "",
        );

        assert!(matches!(
            result,
            Err(LabelError::SheetFullyExcluded { sheet: 0 })
        ));
    }
}
