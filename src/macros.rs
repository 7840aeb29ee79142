//! 宏集合：`add_joins!` / `add_conditions!` / `add_order_by!` 接受任意个片段，
//! 每个参数可以是单个字符串，也可以是字符串数组或 `Vec`。

/// 可以展开为若干 SQL 片段的类型。
pub trait IntoStrings {
    fn push_into(self, dst: &mut Vec<String>);
}

macro_rules! single_fragment {
    ($($ty:ty),+) => {
        $(
            impl IntoStrings for $ty {
                fn push_into(self, dst: &mut Vec<String>) {
                    dst.push(self.into());
                }
            }
        )+
    };
}

single_fragment!(String, &str, &String);

impl<T: Into<String>, const N: usize> IntoStrings for [T; N] {
    fn push_into(self, dst: &mut Vec<String>) {
        dst.extend(self.map(Into::into));
    }
}

impl<T: Into<String>> IntoStrings for Vec<T> {
    fn push_into(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

pub fn collect_into_strings(value: impl IntoStrings) -> Vec<String> {
    let mut dst = Vec::new();
    value.push_into(&mut dst);
    dst
}

#[doc(hidden)]
#[macro_export]
macro_rules! __append_fragments {
    ($table:expr, $method:ident $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fragments = Vec::<String>::new();
        $( $crate::macros::IntoStrings::push_into($arg, &mut fragments); )*
        $table.$method(fragments)
    }};
}

/// `Table::add_joins` 的可变参数形式。
#[macro_export]
macro_rules! add_joins {
    ($table:expr $(, $join:expr)* $(,)?) => {
        $crate::__append_fragments!($table, add_joins $(, $join)*)
    };
}

/// `Table::add_conditions` 的可变参数形式。
#[macro_export]
macro_rules! add_conditions {
    ($table:expr $(, $cond:expr)* $(,)?) => {
        $crate::__append_fragments!($table, add_conditions $(, $cond)*)
    };
}

/// `Table::add_order_by` 的可变参数形式。
#[macro_export]
macro_rules! add_order_by {
    ($table:expr $(, $col:expr)* $(,)?) => {
        $crate::__append_fragments!($table, add_order_by $(, $col)*)
    };
}
