/// 写到标准错误，是终端时加上ANSI颜色`$color`。
#[macro_export]
macro_rules! colored_eprintln {
    ($color:literal, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            eprintln!("\x1b[{}m{}\x1b[0m", $color, format_args!($($arg)*));
        } else {
            eprintln!($($arg)*);
        }
    };
}

/// 错误信息，粗体红色。
#[macro_export]
macro_rules! println_err {
    ($($arg:tt)*) => {
        $crate::colored_eprintln!("1;31", $($arg)*)
    };
}

/// `peek`经过的元素，品红色，不与标准输出上的结果混在一起。
#[macro_export]
macro_rules! println_notice {
    ($($arg:tt)*) => {
        $crate::colored_eprintln!("35", $($arg)*)
    };
}
