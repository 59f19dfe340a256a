//! Reading a whole `xrandr --listactivemonitors` report.
//!
//! ```text
//! Monitors: 2
//!  0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
//!  1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
//! ```

use std::io::BufRead;

use crate::{config::HeaderPolicy, error::GeometryError, selector::Monitors};

/// Reads the header and monitor lines from `reader` and collects the parsed monitors.
/// The first malformed monitor line aborts the whole read.
pub fn read_report<R: BufRead>(
    reader: R,
    policy: HeaderPolicy,
) -> Result<Monitors, GeometryError> {
    log::trace!("Entering read_report.");

    let mut monitors = Monitors::new();
    let mut lines = reader.lines();

    let Some(header) = lines.next().transpose()? else {
        log::warn!("Input is empty, no monitors listed.");
        return Ok(monitors);
    };
    log::debug!("Header line: {:?}", header);

    let expected = match policy {
        HeaderPolicy::Skip => None,
        HeaderPolicy::Counted | HeaderPolicy::Strict => Some(parse_header_count(&header)?),
    };

    let mut line_number = 1;
    while let Some(line) = lines.next().transpose()? {
        line_number += 1;

        if let Some(expected) = expected {
            if monitors.count() == expected {
                if policy == HeaderPolicy::Strict {
                    let actual = expected + 1 + lines.by_ref().count();
                    return Err(GeometryError::CountMismatch { expected, actual });
                }
                log::info!(
                    "Ignoring input after line {}, header announced {} monitors.",
                    line_number - 1,
                    expected
                );
                break;
            }
        }

        monitors
            .parse_line(&line)
            .map_err(|source| GeometryError::MalformedRecord {
                line_number,
                line: line.clone(),
                source,
            })?;
    }

    if let Some(expected) = expected {
        let actual = monitors.count();
        if actual < expected {
            if policy == HeaderPolicy::Strict {
                return Err(GeometryError::CountMismatch { expected, actual });
            }
            log::warn!(
                "Header announced {} monitors but only {} were listed.",
                expected,
                actual
            );
        }
    }

    log::info!("Parsed {} monitors.", monitors.count());
    log::trace!("Leaving read_report.");
    Ok(monitors)
}

/// Parses the monitor count of a header line of the form `<text>:<count>`.
pub fn parse_header_count(header: &str) -> Result<usize, GeometryError> {
    header
        .split(':')
        .nth(1)
        .and_then(|count| count.trim().parse().ok())
        .ok_or_else(|| GeometryError::MalformedHeader(header.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selection;

    const TWO_MONITORS: &str = "Monitors: 2
 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
 1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
";

    #[test]
    fn test_header_count() {
        assert_eq!(2, parse_header_count("Monitors: 2").unwrap());
        assert_eq!(0, parse_header_count("Monitors:0").unwrap());
        assert!(matches!(
            parse_header_count("Monitors 2"),
            Err(GeometryError::MalformedHeader(_))
        ));
        assert!(matches!(
            parse_header_count("Monitors: two"),
            Err(GeometryError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_skip_header() {
        let monitors = read_report(TWO_MONITORS.as_bytes(), HeaderPolicy::Skip).unwrap();

        assert_eq!(2, monitors.count());
        assert_eq!("1920x1080+0+0", monitors.select(Selection::First).unwrap());
        assert_eq!("2560x1440+1920+0", monitors.select(Selection::Largest).unwrap());
    }

    #[test]
    fn test_skip_ignores_header_count() {
        let input = "Monitors: 5\n 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1\n";
        let monitors = read_report(input.as_bytes(), HeaderPolicy::Skip).unwrap();

        assert_eq!(1, monitors.count());
    }

    #[test]
    fn test_empty_input() {
        let monitors = read_report("".as_bytes(), HeaderPolicy::Strict).unwrap();
        assert!(monitors.is_empty());

        let monitors = read_report("Monitors: 0\n".as_bytes(), HeaderPolicy::Strict).unwrap();
        assert!(monitors.is_empty());
    }

    #[test]
    fn test_counted_ignores_trailing_lines() {
        let input = "Monitors: 1
 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
this is not a monitor
";
        let monitors = read_report(input.as_bytes(), HeaderPolicy::Counted).unwrap();

        assert_eq!(1, monitors.count());
    }

    #[test]
    fn test_counted_short_input() {
        let input = "Monitors: 3\n 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1\n";
        let monitors = read_report(input.as_bytes(), HeaderPolicy::Counted).unwrap();

        assert_eq!(1, monitors.count());
    }

    #[test]
    fn test_strict_count_mismatch() {
        let input = "Monitors: 3\n 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1\n";
        assert!(matches!(
            read_report(input.as_bytes(), HeaderPolicy::Strict),
            Err(GeometryError::CountMismatch {
                expected: 3,
                actual: 1
            })
        ));

        let input = "Monitors: 1
 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
 1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
 2: +DP-1 1280/1x1024/1+4480+0  DP-1
";
        assert!(matches!(
            read_report(input.as_bytes(), HeaderPolicy::Strict),
            Err(GeometryError::CountMismatch {
                expected: 1,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_strict_exact_count() {
        let monitors = read_report(TWO_MONITORS.as_bytes(), HeaderPolicy::Strict).unwrap();

        assert_eq!(2, monitors.count());
    }

    #[test]
    fn test_counted_malformed_header() {
        assert!(matches!(
            read_report("Monitors\n".as_bytes(), HeaderPolicy::Counted),
            Err(GeometryError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_malformed_line_aborts() {
        let input = "Monitors: 3
 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
 1: +HDMI-1 2560x1440+1920+0  HDMI-1
 2: +DP-1 1280/1x1024/1+4480+0  DP-1
";
        match read_report(input.as_bytes(), HeaderPolicy::Skip) {
            Err(GeometryError::MalformedRecord {
                line_number, line, ..
            }) => {
                assert_eq!(3, line_number);
                assert_eq!(" 1: +HDMI-1 2560x1440+1920+0  HDMI-1", line);
            }
            other => panic!("expected a malformed record, got {:?}", other),
        }
    }
}
