use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{Accumulator, AggregateError, Outcome};
use crate::config::{ReadOptions, UnreadablePolicy};
use crate::shared::parse_line;

/// Stream every token of `path` into `acc`, in file order.
///
/// The file handle is closed before the outcome is returned. I/O failures go
/// through the unreadable policy. Lines are decoded lossily, so invalid UTF-8
/// is just another malformed token: it stops the read under the error policy
/// (reported with its 1-based line number) and counts as zero otherwise.
pub fn fold_file<A: Accumulator>(path: &Path, options: ReadOptions, mut acc: A) -> Outcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return recover(
                options.unreadable,
                AggregateError::Open {
                    path: path.to_path_buf(),
                    source,
                },
            );
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(source) => {
                return recover(
                    options.unreadable,
                    AggregateError::Read {
                        path: path.to_path_buf(),
                        line: line_number + 1,
                        source,
                    },
                );
            }
        }

        // Undecodable bytes become U+FFFD and fall to the malformed-token policy
        let line = String::from_utf8_lossy(&buf);
        for token in parse_line(&line, options.malformed) {
            let value = token.map_err(|e| AggregateError::Malformed {
                line: line_number,
                token: e.token,
            })?;
            acc.push(value);
        }
    }

    Ok(acc.finish())
}

fn recover(policy: UnreadablePolicy, error: AggregateError) -> Outcome {
    match policy {
        UnreadablePolicy::Error => Err(error),
        UnreadablePolicy::Zero => {
            tracing::debug!("Treating unreadable input as zero: {}", error);
            Ok(0)
        }
    }
}
