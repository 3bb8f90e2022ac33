use std::io::Write;

use anyhow::Result;
use mxsniff::SniffAndProbe;

/// Streams result rows to `W`: a JSON array written element by element, or
/// one CSV row per input.
pub enum RowWriter<W: Write> {
    Json { out: W, first: bool },
    Csv(csv::Writer<W>),
}

impl<W: Write> RowWriter<W> {
    pub fn json(mut out: W) -> Result<Self> {
        out.write_all(b"[\n")?;
        Ok(Self::Json { out, first: true })
    }

    pub fn csv(out: W) -> Self {
        Self::Csv(csv::WriterBuilder::new().flexible(true).from_writer(out))
    }

    pub fn write(&mut self, row: &SniffAndProbe) -> Result<()> {
        match self {
            Self::Json { out, first } => {
                if !*first {
                    out.write_all(b",\n")?;
                }
                *first = false;
                serde_json::to_writer(&mut *out, row)?;
                out.flush()?;
            }
            Self::Csv(wtr) => {
                wtr.write_record(csv_fields(row))?;
                wtr.flush()?;
            }
        }
        Ok(())
    }

    /// Closes the JSON array and flushes, handing back the sink.
    pub fn finish(self) -> Result<W> {
        match self {
            Self::Json { mut out, .. } => {
                out.write_all(b"\n]\n")?;
                out.flush()?;
                Ok(out)
            }
            Self::Csv(wtr) => Ok(wtr.into_inner().map_err(|err| err.into_error())?),
        }
    }
}

/// Query followed by the probe result tuple when probing, by the matched
/// provider ids otherwise.
pub fn csv_fields(row: &SniffAndProbe) -> Vec<String> {
    let mut fields = vec![row.sniff.query.clone()];
    match &row.probe {
        Some(probe) => {
            fields.push(probe.result.to_string());
            fields.push(probe.code.map(|code| code.to_string()).unwrap_or_default());
            fields.push(probe.message.clone().unwrap_or_default());
        }
        None => fields.extend(row.sniff.matches.iter().cloned()),
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use mxsniff::{MxRecord, ProbeReport, ProbeVerdict, SniffResult};

    fn row(query: &str, matches: &[&str], mx: Vec<MxRecord>) -> SniffAndProbe {
        SniffAndProbe {
            sniff: SniffResult {
                query: query.to_string(),
                domain: "example.com".to_string(),
                matches: matches.iter().map(|m| m.to_string()).collect(),
                mx,
                providers: Vec::new(),
                public: false,
                canonical: None,
            },
            probe: None,
        }
    }

    fn render(mut writer: RowWriter<Vec<u8>>, rows: &[SniffAndProbe]) -> String {
        for r in rows {
            writer.write(r).expect("write row");
        }
        let out = writer.finish().expect("finish");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn csv_rows_list_matches() {
        let rows = [
            row("example.com", &["nullmx"], vec![MxRecord::new(0, ".")]),
            row(
                "Someone <a@example.com>",
                &["mimecast", "google-apps"],
                vec![MxRecord::new(10, "eu-smtp-inbound-1.mimecast.com")],
            ),
        ];
        assert_snapshot!(render(RowWriter::csv(Vec::new()), &rows), @r#"
        example.com,nullmx
        Someone <a@example.com>,mimecast,google-apps
        "#);
    }

    #[test]
    fn csv_rows_with_probe() {
        let mut probed = row("user@example.com", &["unknown"], Vec::new());
        probed.probe = Some(ProbeReport::new(
            ProbeVerdict::HardFail,
            Some(550),
            Some("5.1.1 No such user, sorry".to_string()),
        ));
        let mut invalid = row("example.com", &["nullmx"], Vec::new());
        invalid.probe = Some(ProbeReport::invalid());

        assert_snapshot!(render(RowWriter::csv(Vec::new()), &[probed, invalid]), @r#"
        user@example.com,hard-fail,550,"5.1.1 No such user, sorry"
        example.com,invalid,,
        "#);
    }

    #[test]
    fn json_array_is_streamed() {
        let writer = RowWriter::json(Vec::new()).expect("open array");
        let rows = [row("example.com", &["nullmx"], vec![MxRecord::new(0, ".")])];
        assert_snapshot!(render(writer, &rows), @r#"
        [
        {"query":"example.com","domain":"example.com","match":["nullmx"],"mx":[[0,"."]],"providers":[],"public":false,"canonical":null}
        ]
        "#);
    }

    #[test]
    fn empty_json_array() {
        let writer = RowWriter::json(Vec::new()).expect("open array");
        let out = render(writer, &[]);
        assert_eq!(out, "[\n\n]\n");
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }
}
