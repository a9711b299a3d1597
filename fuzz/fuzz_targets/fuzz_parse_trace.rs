#![no_main]

use gcxgc::pipeline::{reconstruct, ReconstructRequest};
use gcxgc::preset::Preset;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Parsing must either succeed or return an error, never panic
    let Ok(trace) = gcxgc::trace::parse_trace(Cursor::new(data)) else {
        return;
    };

    // Cycles never exceed the trace, so allocation stays bounded by the input
    let runtime = trace.runtime();
    for period in [
        Preset::Gasoline.modulation_period(),
        Preset::Biodiesel.modulation_period(),
        1e20,
    ] {
        let request = ReconstructRequest::new(period).with_slice_time(runtime / 2.0);
        let _ = reconstruct(&trace, &request);
    }
});
