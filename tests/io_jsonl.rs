#![cfg(feature = "io-jsonl")]

use mapstream::testing::*;
use mapstream::*;
use std::fs;

#[test]
fn write_then_read_preserves_pairs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pairs.jsonl");

    let pairs = pairs_of(vec![
        ("a".to_string(), 1u32),
        ("b".to_string(), 2),
        ("c".to_string(), 3),
    ]);
    let written = write_jsonl_pairs(&path, &pairs)?;
    assert_eq!(written, 3);

    let read: Vec<Pair<String, u32>> = read_jsonl_pairs(&path)?;
    assert_eq!(read, pairs);
    Ok(())
}

#[test]
fn blank_lines_are_skipped_on_read() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sparse.jsonl");

    fs::write(
        &path,
        "{\"key\":1,\"value\":10}\n\n   \n{\"key\":2,\"value\":20}\n",
    )?;

    let read: Vec<Pair<i32, i32>> = read_jsonl_pairs(&path)?;
    assert_eq!(read, pairs_of(vec![(1, 10), (2, 20)]));
    Ok(())
}

#[test]
fn stream_round_trip_through_a_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("totals.jsonl");

    // writer creates the parent directory
    let written = from_entries(vec![("x".to_string(), 1u64), ("y".to_string(), 2)])
        .map_values(|v| v * 100)
        .write_jsonl(&path)?;
    assert_eq!(written, 2);

    let totals: std::collections::HashMap<String, u64> = read_jsonl_stream(&path)?.to_map()?;
    assert_mapping_equal(
        &totals,
        &mapping_of(vec![("x".to_string(), 100), ("y".to_string(), 200)]),
    );
    Ok(())
}

#[test]
fn parse_errors_name_the_line() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.jsonl");

    fs::write(&path, "{\"key\":1,\"value\":10}\nnot json\n")?;

    let res: anyhow::Result<Vec<Pair<i32, i32>>> = read_jsonl_pairs(&path);
    let err = res.unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
    Ok(())
}
