//! Writes a calculated bill to a plain-text invoice file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

/// Title printed in the invoice header.
pub const INVOICE_TITLE: &str = "PIZZERIA PRO";

/// Prefix of generated invoice file names.
pub const FILE_PREFIX: &str = "Pizza";

const BANNER: &str = "===================================";

/// Errors that can occur when exporting a bill
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export, calculate the bill first")]
    NothingToExport,

    #[error("failed to write bill to {}: {source}", .path.display())]
    ExportFailed { path: PathBuf, source: io::Error },
}

/// `<prefix>_Bill_<YYYY-MM-DD_HH-mm-ss>.txt`
pub fn default_file_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_Bill_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Append `.txt` to the last path component unless it already ends with it
/// (any case). A trailing separator is dropped first, so `receipts/` becomes
/// `receipts.txt`. Paths without a file name (`.`, `..`, `/`) are returned
/// unchanged.
pub fn with_txt_extension(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Some(name) = path.file_name() else {
        return path;
    };
    if name.to_string_lossy().to_lowercase().ends_with(".txt") {
        return path.components().collect();
    }
    let mut name = name.to_os_string();
    name.push(".txt");
    path.with_file_name(name)
}

/// Invoice file content: header with title and date, the bill, footer.
pub fn render_invoice(title: &str, bill_text: &str, now: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("       {title} - INVOICE      \n"));
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("Date: {}\n\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(bill_text);
    out.push_str("\n\n");
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("       THANK YOU FOR YOUR ORDER!    \n");
    out.push_str(BANNER);
    out.push('\n');
    out
}

/// Write `bill_text` to `target` (or a timestamped default name in the
/// current directory) and return the path actually written.
pub fn export_bill(
    bill_text: Option<&str>,
    target: Option<&Path>,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let bill_text = bill_text
        .filter(|text| !text.is_empty())
        .ok_or(ExportError::NothingToExport)?;

    let path = match target {
        // a bare directory such as `.` gets the default name inside it
        Some(target) if target.file_name().is_none() => {
            target.join(default_file_name(FILE_PREFIX, now))
        }
        Some(target) => with_txt_extension(target),
        None => PathBuf::from(default_file_name(FILE_PREFIX, now)),
    };

    let content = render_invoice(INVOICE_TITLE, bill_text, now);
    write_file(&path, &content).map_err(|source| ExportError::ExportFailed {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(18, 5, 7)
            .unwrap()
    }

    #[test]
    fn default_file_name_is_timestamped() {
        assert_eq!(
            default_file_name("Pizza", at()),
            "Pizza_Bill_2024-03-09_18-05-07.txt"
        );
    }

    #[test]
    fn txt_extension_is_appended() {
        assert_eq!(with_txt_extension("bill"), PathBuf::from("bill.txt"));
        assert_eq!(with_txt_extension("bill.csv"), PathBuf::from("bill.csv.txt"));
        assert_eq!(with_txt_extension("out/bill"), PathBuf::from("out/bill.txt"));
    }

    #[test]
    fn txt_extension_goes_on_the_last_component() {
        assert_eq!(with_txt_extension("receipts/"), PathBuf::from("receipts.txt"));
        assert_eq!(with_txt_extension("out/receipts/"), PathBuf::from("out/receipts.txt"));
        assert_eq!(with_txt_extension("bill.txt/"), PathBuf::from("bill.txt"));
        assert_eq!(with_txt_extension("."), PathBuf::from("."));
    }

    #[test]
    fn txt_extension_is_kept() {
        assert_eq!(with_txt_extension("bill.txt"), PathBuf::from("bill.txt"));
        assert_eq!(with_txt_extension("BILL.TXT"), PathBuf::from("BILL.TXT"));
    }

    #[test]
    fn invoice_layout() {
        let invoice = render_invoice("PIZZERIA PRO", "Detailed Bill:\nTotal Bill: ₹0.00", at());
        let expected = "===================================\n\
                        \x20      PIZZERIA PRO - INVOICE      \n\
                        ===================================\n\
                        Date: 2024-03-09 18:05:07\n\
                        \n\
                        Detailed Bill:\n\
                        Total Bill: ₹0.00\n\
                        \n\
                        ===================================\n\
                        \x20      THANK YOU FOR YOUR ORDER!    \n\
                        ===================================\n";
        assert_eq!(invoice, expected);
    }

    #[test]
    fn export_without_bill_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("bill.txt");
        let result = export_bill(None, Some(target.as_path()), at());
        assert!(matches!(result, Err(ExportError::NothingToExport)));
        assert!(!target.exists());

        let result = export_bill(Some(""), Some(target.as_path()), at());
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn export_writes_txt_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("receipt");
        let path = export_bill(Some("Total Bill: ₹5.00"), Some(target.as_path()), at()).unwrap();

        assert_eq!(path, dir.path().join("receipt.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_invoice(INVOICE_TITLE, "Total Bill: ₹5.00", at()));
    }

    #[test]
    fn export_to_trailing_slash_target_writes_sibling_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("receipts")).unwrap();
        let target = PathBuf::from(format!("{}/receipts/", dir.path().display()));

        let path = export_bill(Some("Total Bill: ₹1.00"), Some(target.as_path()), at()).unwrap();

        assert_eq!(path, dir.path().join("receipts.txt"));
        assert!(path.is_file());
        assert_eq!(std::fs::read_dir(dir.path().join("receipts")).unwrap().count(), 0);
    }

    #[test]
    fn export_to_bare_directory_uses_default_name() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let target = dir.path().join("sub").join("..");

        let path = export_bill(Some("Total Bill: ₹1.00"), Some(target.as_path()), at()).unwrap();

        assert_eq!(path, target.join("Pizza_Bill_2024-03-09_18-05-07.txt"));
        assert!(dir.path().join("Pizza_Bill_2024-03-09_18-05-07.txt").is_file());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("bill.txt");
        let err = export_bill(Some("bill"), Some(target.as_path()), at()).unwrap_err();
        match err {
            ExportError::ExportFailed { path, source } => {
                assert_eq!(path, target);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ExportFailed, got {other:?}"),
        }
    }
}
