pub mod trace_loader;
