use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::fs;
use std::path::{Path, PathBuf};
use testgen::{check, generate_all, read_file, write_file, Format, Layout};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("testgen-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_set(dir: &Path, seed: u64, format: Format) {
    let specs = Layout::default().specs().unwrap();
    let mut rng = Pcg32::seed_from_u64(seed);

    for vector in generate_all(&specs, &mut rng).unwrap() {
        let path = format.path_in(dir, vector.spec.file_name);
        write_file(&path, &vector.values, format).unwrap();
    }
}

#[test]
fn default_set_passes_checks() {
    let dir = scratch_dir("default");
    let specs = Layout::default().specs().unwrap();
    let mut rng = Pcg32::seed_from_u64(2048);

    for vector in generate_all(&specs, &mut rng).unwrap() {
        let path = dir.join(vector.spec.file_name);
        write_file(&path, &vector.values, Format::Hex).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2048);
        assert!(text.ends_with('\n'));
        assert!(text
            .lines()
            .all(|line| line.len() == 8 && line.bytes().all(|b| b"0123456789abcdef".contains(&b))));

        let values = read_file(&path, Format::Hex).unwrap();
        assert_eq!(values, vector.values);

        let report = check(&vector.spec, &values, vector.pool.as_deref()).unwrap();
        assert_eq!(report.count, 2048);
    }

    let gaps = read_file(dir.join("buff_gapn.txt"), Format::Hex).unwrap();
    assert!(gaps.iter().all(|&v| v < 32));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn fixed_seed_reproduces_files() {
    let a = scratch_dir("seed-a");
    let b = scratch_dir("seed-b");

    write_set(&a, 0x5eed, Format::Hex);
    write_set(&b, 0x5eed, Format::Hex);

    for name in &["head_info.txt", "buff_addr.txt", "buff_gapn.txt"] {
        assert_eq!(fs::read(a.join(name)).unwrap(), fs::read(b.join(name)).unwrap());
    }

    fs::remove_dir_all(&a).unwrap();
    fs::remove_dir_all(&b).unwrap();
}

#[test]
fn binary_and_hex_carry_same_values() {
    let hex = scratch_dir("hex");
    let bin = scratch_dir("bin");

    write_set(&hex, 99, Format::Hex);
    write_set(&bin, 99, Format::Binary);

    for spec in Layout::default().specs().unwrap() {
        let from_hex = read_file(Format::Hex.path_in(&hex, spec.file_name), Format::Hex).unwrap();
        let from_bin =
            read_file(Format::Binary.path_in(&bin, spec.file_name), Format::Binary).unwrap();

        assert_eq!(from_hex, from_bin);
        assert!(check(&spec, &from_bin, None).is_ok());
    }

    assert_eq!(fs::metadata(bin.join("buff_addr.bin")).unwrap().len(), 2048 * 4);

    fs::remove_dir_all(&hex).unwrap();
    fs::remove_dir_all(&bin).unwrap();
}
