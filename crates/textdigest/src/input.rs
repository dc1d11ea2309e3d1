use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use textdigest_common::{Result, TextDigestError};
use tracing::{debug, info};

/// Where the text to summarize comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read a file
    File(PathBuf),

    /// Read piped stdin to the end
    Stdin,

    /// Ask the user through the menu
    Interactive,
}

/// Read typed lines until an empty line (or EOF)
pub fn read_text_from_reader<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut lines = Vec::new();

    loop {
        let Some(line) = read_line(reader)? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    debug!("Read {} lines of input", lines.len());

    Ok(lines.join("\n").trim().to_string())
}

/// Read a whole stream, e.g. piped stdin
pub fn read_text_to_end<R: Read>(reader: &mut R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.trim().to_string())
}

/// Read a UTF-8 text file
pub fn read_text_from_file(path: &Path) -> Result<String> {
    info!("Reading input file {}", path.display());

    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(TextDigestError::not_found(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the source menu and read text from the chosen source
pub fn read_text_interactive<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    writeln!(writer, "Text Summarizer")?;
    writeln!(writer, "1) Type/paste text")?;
    writeln!(writer, "2) Read from a file")?;
    let choice = prompt(reader, writer, "Choose an option (1 or 2): ")?;

    if choice == "2" {
        let file_path = prompt(reader, writer, "Enter the file path: ")?;
        read_text_from_file(Path::new(&file_path))
    } else {
        writeln!(
            writer,
            "Enter/paste your text. When finished, press Enter on an empty line:"
        )?;
        writer.flush()?;
        read_text_from_reader(reader)
    }
}

/// Read text from a source
pub fn read_text<R: BufRead, W: Write>(
    source: &InputSource,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    match source {
        InputSource::File(path) => read_text_from_file(path),
        InputSource::Stdin => read_text_to_end(reader),
        InputSource::Interactive => read_text_interactive(reader, writer),
    }
}

/// Print a message and read one trimmed answer line
fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, message: &str) -> Result<String> {
    write!(writer, "{}", message)?;
    writer.flush()?;
    Ok(read_line(reader)?.unwrap_or_default().trim().to_string())
}

/// Read one line without its line ending, `None` at EOF
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
