#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Settings and table parsing must reject malformed input with an error,
    // never a panic.
    if let Ok(cfg) = m1m3_config::load_yaml(data) {
        let _ = cfg.validate();
    }

    for rows in [0usize, 1, 6, 156] {
        let parsed: eyre::Result<m1m3_config::ForceTable> =
            m1m3_config::ForceTable::parse(data, "fuzz", rows);
        if let Ok(mut table) = parsed {
            let _ = table.column("X");
            let _ = table.without_column(m1m3_config::ID_COLUMN);
            let _ = table.add(0, "Z", 1.0);
            let mut out = Vec::new();
            let _ = table.write_to(&mut out);
        }
    }
});
