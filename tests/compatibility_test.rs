use heapsort_kit::core::Comparator;
use heapsort_kit::line::MAX_LINE_LEN;
use heapsort_kit::prelude::*;
use std::cmp::Ordering;

// Simulate an external record type with its own ordering (like a database row).
#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    name: &'static str,
}

// A comparator implemented by hand rather than as a closure.
// This proves the trait is implementable by "outside crates".
struct ByName;

impl Comparator<Row> for ByName {
    fn compare(&mut self, a: &Row, b: &Row) -> Ordering {
        a.name.cmp(b.name)
    }
}

#[test]
fn test_external_comparator_compatibility() {
    for algorithm in Algorithm::ALL {
        let mut rows = vec![
            Row { id: 0, name: "foo" },
            Row { id: 1, name: "bar" },
            Row { id: 2, name: "baz" },
        ];
        sort_by(&mut rows, algorithm, ByName).unwrap();

        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        // sorted: bar (1), baz (2), foo (0)
        assert_eq!(ids, vec![1, 2, 0]);
    }
}

#[test]
fn test_external_comparator_with_heap_engine() {
    let mut rows = vec![
        Row { id: 0, name: "a" },
        Row { id: 1, name: "c" },
        Row { id: 2, name: "b" },
    ];
    build_max_heap(&mut rows, ByName);
    assert!(is_max_heap(&rows, ByName));
    assert_eq!(rows[0].name, "c");
}

#[test]
fn test_line_records() {
    let input = ["pear\n", "apple\n", "fig\n", "apple pie\n", "\n"];

    for algorithm in Algorithm::ALL {
        let mut lines: Vec<Line> = input.into_iter().map(Line::from).collect();
        sort(&mut lines, algorithm).unwrap();

        let sorted: Vec<&[u8]> = lines.iter().map(|l| l.as_bytes()).collect();
        assert_eq!(
            sorted,
            vec![
                b"\n".as_slice(),
                b"apple\n".as_slice(),
                b"apple pie\n".as_slice(),
                b"fig\n".as_slice(),
                b"pear\n".as_slice(),
            ]
        );
    }
}

#[test]
fn test_line_truncation() {
    let long = vec![b'x'; 200];
    let line = Line::new(&long);
    assert_eq!(line.len(), MAX_LINE_LEN - 1);

    // Lines that agree on the first MAX_LINE_LEN - 1 bytes are equal records.
    let mut other = long.clone();
    other[150] = b'a';
    assert_eq!(Line::new(&other), line);
}

#[test]
fn test_compare_lines_bounds() {
    assert_eq!(compare_lines(b"", b""), Ordering::Equal);
    assert_eq!(compare_lines(b"", b"a"), Ordering::Less);
    assert_eq!(compare_lines(b"b", b"a"), Ordering::Greater);

    // Bytes after the terminator are never looked at.
    assert_eq!(compare_lines(b"ab\0zzz", b"ab\0aaa"), Ordering::Equal);

    // Comparison stops after MAX_LINE_LEN positions.
    let mut a = vec![b'q'; MAX_LINE_LEN + 10];
    let b = a.clone();
    a[MAX_LINE_LEN + 5] = b'a';
    assert_eq!(compare_lines(&a, &b), Ordering::Equal);

    // Unsigned byte order.
    assert_eq!(compare_lines(&[0x80], &[0x7f]), Ordering::Greater);
}

#[test]
fn test_sort_request_parsing() {
    let request: SortRequest = "h".parse().unwrap();
    assert_eq!(request.algorithm, Algorithm::Heap);
    assert!(!request.quiet);

    let request: SortRequest = "bq".parse().unwrap();
    assert_eq!(request.algorithm, Algorithm::Bubble);
    assert!(request.quiet);

    // Only a trailing 'q' selects quiet mode.
    let request: SortRequest = "sx".parse().unwrap();
    assert!(!request.quiet);

    assert!(matches!(
        "".parse::<SortRequest>(),
        Err(SortError::MissingFlag)
    ));
    assert!(matches!(
        "z".parse::<SortRequest>(),
        Err(SortError::UnknownAlgorithm('z'))
    ));

    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_flag(algorithm.flag()).unwrap(), algorithm);
        assert_eq!(
            algorithm.flag().to_string().parse::<Algorithm>().unwrap(),
            algorithm
        );
    }
}

#[test]
fn test_algorithm_parse_rejects_trailing_input() {
    // A plain algorithm is one flag or one full name, nothing more.
    assert!(matches!(
        "hq".parse::<Algorithm>(),
        Err(SortError::UnknownName(ref s)) if s == "hq"
    ));
    assert!(matches!(
        "hzz".parse::<Algorithm>(),
        Err(SortError::UnknownName(ref s)) if s == "hzz"
    ));
    assert!(matches!(
        "heapsortx".parse::<Algorithm>(),
        Err(SortError::UnknownName(_))
    ));
    assert!(matches!(
        "".parse::<Algorithm>(),
        Err(SortError::MissingFlag)
    ));
    assert!(matches!(
        "x".parse::<Algorithm>(),
        Err(SortError::UnknownAlgorithm('x'))
    ));

    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
    }

    // The quiet suffix is only understood by SortRequest.
    let request: SortRequest = "hq".parse().unwrap();
    assert_eq!(request.algorithm, Algorithm::Heap);
    assert!(request.quiet);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SortError::UnknownAlgorithm('x').to_string(),
        "Incorrect algorithm selection flag: 'x'"
    );
    assert_eq!(
        SortError::MissingFlag.to_string(),
        "Missing algorithm selection flag"
    );
    assert_eq!(
        SortError::UnknownName("hq".to_string()).to_string(),
        "Unknown algorithm: \"hq\""
    );
}
