use std::path::PathBuf;

pub fn extract_base_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_stem()
        .and_then(|name| name.to_str())
        .expect("Unable to extract base name")
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

/**
 * Store a path and prefix together, making it easy to generate a
 * collection of output files (image, CSV, legend, diagnostics) that share
 * the same prefix but have different suffixes.
 */
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    /// Derives `out/<command>/<base>[/<datetime>]` from the parameter-file
    /// path and creates that directory tree on disk.
    pub fn build(params_path: &str, command: &str, date_time_out: bool) -> FilePrefix {
        let file_base = extract_base_name(params_path).to_owned();
        let mut directory_path: PathBuf = ["out", command, file_base.as_str()].iter().collect();
        if date_time_out {
            directory_path.push(date_time_string());
        }
        std::fs::create_dir_all(&directory_path)
            .unwrap_or_else(|_| panic!("failed to create directory: {:?}", directory_path));
        FilePrefix {
            directory_path,
            file_base,
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_file_with_suffix(&self, suffix: &str) -> std::io::BufWriter<std::fs::File> {
        let path = self.with_suffix(suffix);
        let file = std::fs::File::create(&path)
            .unwrap_or_else(|_| panic!("failed to create file: {:?}", path));
        std::io::BufWriter::new(file)
    }
}

pub fn serialize_to_json_or_panic<T: serde::Serialize>(path: PathBuf, value: &T) {
    let contents = serde_json::to_string_pretty(value).expect("Unable to serialize parameters");
    std::fs::write(&path, contents)
        .unwrap_or_else(|_| panic!("failed to write JSON file: {:?}", path));
}
