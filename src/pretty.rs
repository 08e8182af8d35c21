macro_rules! print_cmd_error {
    ($tt:tt) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        eprintln!("\x1b[1;31m[ERROR!!!]\x1b[0m Start details...");
        eprintln!("{}", core::format_args!($($tts)*));
        eprintln!("\x1b[1;31m[ERROR!!!]\x1b[0m End details.\n");
    }
}

macro_rules! handle_cmd_error {
    ($err:tt, $tt:tt) => {{
        print_cmd_error!($tt);
        format!("{}", $err)
    }};
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO!!!] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

pub(crate) use handle_cmd_error;
pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
