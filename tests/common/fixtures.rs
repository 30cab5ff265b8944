//! Log corpora shaped like real qualification-test `debug.log` files.
//!
//! Each constant is a complete log for one test. Values are chosen so the
//! expected metrics are easy to compute by hand.

/// Kernel fio sequential write, two passes averaging 600 MiB/s.
pub const KERNEL_WRITE_LOG: &str = "\
[stdlog] 2026-01-14 21:08:01,112 avocado.test INFO | Test metadata: {'name': 'test_seq_write'}
[stdlog] 2026-01-14 21:08:01,113 avocado.test INFO | Starting sequential write, 2 passes
[stdlog] 2026-01-14 21:11:23,540 avocado.test INFO | ✓ Pass 1: 500.0 MiB/s, 202s
[stdlog] 2026-01-14 21:14:45,001 avocado.test INFO | ✓ Pass 2: 700.0 MiB/s, 201s
[stdlog] 2026-01-14 21:14:45,002 avocado.test INFO | PASS 1-Storage.test_seq_write
";

/// fio run with `--output-format=json` echoed through the process runner.
/// Two jobs: 2 MiB/s and 250 IOPS read in total, write idle. A stderr
/// progress line is interleaved with the JSON.
pub const FIO_STDOUT_LOG: &str = "\
[stdlog] 2026-01-14 21:20:00,001 avocado.utils.process INFO | Running 'fio --output-format=json randread.fio'
[stdlog] 2026-01-14 21:20:00,002 avocado.utils.process DEBUG| [stdout] fio-3.28
[stdlog] 2026-01-14 21:20:30,100 avocado.utils.process DEBUG| [stdout] {
[stdlog] 2026-01-14 21:20:30,101 avocado.utils.process DEBUG| [stdout]   \"fio version\" : \"fio-3.28\",
[stdlog] 2026-01-14 21:20:30,102 avocado.utils.process DEBUG| [stdout]   \"jobs\" : [
[stdlog] 2026-01-14 21:20:30,103 avocado.utils.process DEBUG| [stderr] Jobs: 1 (f=1): [r(1)][100.0%]
[stdlog] 2026-01-14 21:20:30,104 avocado.utils.process DEBUG| [stdout]     {
[stdlog] 2026-01-14 21:20:30,105 avocado.utils.process DEBUG| [stdout]       \"jobname\" : \"randread-0\",
[stdlog] 2026-01-14 21:20:30,106 avocado.utils.process DEBUG| [stdout]       \"read\" : {\"bw\" : 1024, \"iops\" : 100},
[stdlog] 2026-01-14 21:20:30,107 avocado.utils.process DEBUG| [stdout]       \"write\" : {\"bw\" : 0, \"iops\" : 0}
[stdlog] 2026-01-14 21:20:30,108 avocado.utils.process DEBUG| [stdout]     },
[stdlog] 2026-01-14 21:20:30,109 avocado.utils.process DEBUG| [stdout]     {
[stdlog] 2026-01-14 21:20:30,110 avocado.utils.process DEBUG| [stdout]       \"jobname\" : \"randread-1\",
[stdlog] 2026-01-14 21:20:30,111 avocado.utils.process DEBUG| [stdout]       \"read\" : {\"bw\" : 1024, \"iops\" : 150},
[stdlog] 2026-01-14 21:20:30,112 avocado.utils.process DEBUG| [stdout]       \"write\" : {\"bw\" : 0, \"iops\" : 0}
[stdlog] 2026-01-14 21:20:30,113 avocado.utils.process DEBUG| [stdout]     }
[stdlog] 2026-01-14 21:20:30,114 avocado.utils.process DEBUG| [stdout]   ]
[stdlog] 2026-01-14 21:20:30,115 avocado.utils.process DEBUG| [stdout] }
[stdlog] 2026-01-14 21:20:30,116 avocado.utils.process INFO | Command 'fio' finished with 0 after 30.1s
";

/// SPDK perf summary table.
pub const SPDK_PERF_LOG: &str = "\
[stdlog] 2026-01-14 21:30:00,001 avocado.utils.process DEBUG| [stdout] Initializing NVMe Controllers
[stdlog] 2026-01-14 21:30:00,002 avocado.utils.process DEBUG| [stdout] ========================================================
[stdlog] 2026-01-14 21:30:00,003 avocado.utils.process DEBUG| [stdout]                                              Latency(us)
[stdlog] 2026-01-14 21:30:00,004 avocado.utils.process DEBUG| [stdout] Device Information                     :       IOPS      MiB/s    Average        min        max
[stdlog] 2026-01-14 21:30:00,005 avocado.utils.process DEBUG| [stdout] PCIE (0000:5e:00.0) NSID 1 from core  0:   20706.96    2588.37    6181.52     812.44   14023.91
[stdlog] 2026-01-14 21:30:00,006 avocado.utils.process DEBUG| [stdout] ========================================================
[stdlog] 2026-01-14 21:30:00,007 avocado.utils.process DEBUG| [stdout] Total                                  :   20706.96    2588.37    6181.52     812.44   14023.91
";

/// Datacenter OLTP summary.
pub const OLTP_LOG: &str = "\
[stdlog] 2026-01-14 21:40:00,001 avocado.test INFO | Running OLTP profile for 60s
[stdlog] 2026-01-14 21:41:00,001 avocado.test INFO | ✓ OLTP: 213841 read IOPS, 53454 write IOPS
";

/// SQLite insert/select rate summary.
pub const SQLITE_LOG: &str = "\
[stdlog] 2026-01-14 21:50:00,001 avocado.test INFO | ✓ SQLite insert rate: 357858.31 rows/s, select: 65.97 ops/s
";

/// stress-ng iomix metrics with the tool's header line.
pub const STRESS_NG_LOG: &str = "\
[stdlog] 2026-01-14 22:00:00,001 avocado.utils.process DEBUG| [stderr] stress-ng: info:  [4242] dispatching hogs: 4 iomix
[stdlog] 2026-01-14 22:01:00,001 avocado.utils.process DEBUG| [stderr] stress-ng: metrc: [4242] stressor       bogo ops real time  usr time  sys time   bogo ops/s     bogo ops/s
[stdlog] 2026-01-14 22:01:00,002 avocado.utils.process DEBUG| [stderr] stress-ng: metrc: [4242] iomix            812345     60.00     12.31     40.02     13539.08     15523.11
";

/// Benchmark results block with latency percentiles, plus a later block the
/// extractor must ignore.
pub const BENCHMARK_LOG: &str = "\
[stdlog] 2026-01-14 22:10:00,001 avocado.test INFO | Benchmark results: {
[stdlog]   \"latency_percentiles\": {
[stdlog]     \"50th_us\": 12.0,
[stdlog]     \"90th_us\": 30.5,
[stdlog]     \"99th_us\": 55.0,
[stdlog]     \"99.9th_us\": 80.1
[stdlog]   },
[stdlog]   \"status\": \"PASS\"
[stdlog] }
[stdlog] 2026-01-14 22:10:00,002 avocado.test INFO | Benchmark results: {\"latency_percentiles\": {\"50th_us\": 1.0}}
";

/// A test that logs nothing measurable.
pub const NO_METRICS_LOG: &str = "\
[stdlog] 2026-01-14 22:20:00,001 avocado.test INFO | Checking SMART health
[stdlog] 2026-01-14 22:20:00,002 avocado.test INFO | SMART overall-health self-assessment: PASSED
";

/// Filesystem results block naming a fio JSON file by `path`.
pub fn filesystem_log(path: &str) -> String {
    format!(
        "[stdlog] 2026-01-14 22:30:00,001 avocado.test INFO | Filesystem test results: {{\n\
         [stdlog]   \"fio_file_verify\": {{\n\
         [stdlog]     \"status\": \"PASS\",\n\
         [stdlog]     \"errors\": 0,\n\
         [stdlog]     \"json\": \"{path}\"\n\
         [stdlog]   }}\n\
         [stdlog] }}\n"
    )
}

/// fio JSON document written by a verify run: 8 MiB/s write, 2048 IOPS.
pub const FIO_VERIFY_JSON: &str =
    r#"{"fio version": "fio-3.28", "jobs": [{"jobname": "verify", "read": {"bw": 0, "iops": 0}, "write": {"bw": 8192, "iops": 2048}}]}"#;
