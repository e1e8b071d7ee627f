use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{DistanceMatrix, NumNodes, Weight};

pub type Result<T> = std::io::Result<T>;

/// Reads a distance matrix from the plain-text instance format:
///
/// ```text
/// c optional comment lines
/// p prp <n>
/// <n rows of n whitespace-separated weights>
/// ```
pub trait MatrixReader: Sized {
    fn try_read<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl MatrixReader for DistanceMatrix {
    fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        InstanceReader::try_new(reader)?.read_matrix()
    }

    fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read(buf_reader)
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

struct InstanceReader<R> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
}

impl<R: BufRead> InstanceReader<R> {
    fn try_new(reader: R) -> Result<Self> {
        let mut instance_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
        };

        instance_reader.number_of_nodes = instance_reader.parse_header()?;
        Ok(instance_reader)
    }

    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<NumNodes> {
        let line = self.next_non_comment_line()?;
        raise_error_unless!(
            line.is_some(),
            ErrorKind::InvalidData,
            "Input ended before the header line."
        );
        let line = line.unwrap();

        let mut tokens = line.split_whitespace();
        raise_error_unless!(
            tokens.next() == Some("p"),
            ErrorKind::InvalidData,
            "Header line does not start with 'p'."
        );
        raise_error_unless!(
            tokens.next() == Some("prp"),
            ErrorKind::InvalidData,
            "Header line does not describe a 'prp' instance."
        );

        let number_of_nodes: NumNodes = parse_next_value!(tokens, "number of nodes");
        Ok(number_of_nodes)
    }

    fn read_matrix(&mut self) -> Result<DistanceMatrix> {
        let n = self.number_of_nodes;
        let mut rows = Vec::with_capacity(n as usize);

        for row_index in 0..n {
            let line = self.next_non_comment_line()?;
            raise_error_unless!(
                line.is_some(),
                ErrorKind::InvalidData,
                format!("Input ended before row {row_index} of the matrix.")
            );
            let line = line.unwrap();

            let mut tokens = line.split_whitespace();
            let mut row: Vec<Weight> = Vec::with_capacity(n as usize);
            for _ in 0..n {
                row.push(parse_next_value!(tokens, "matrix weight"));
            }
            raise_error_unless!(
                tokens.next().is_none(),
                ErrorKind::InvalidData,
                format!("Row {row_index} holds more than {n} weights.")
            );

            rows.push(row);
        }

        Ok(DistanceMatrix::from_rows(&rows))
    }
}
