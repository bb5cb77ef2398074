/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::*;
    pub use internal::auth::structs::webdav_auth::WebdavAuth;
}

/// 对外提供webdav基础访问能力，不能限制死在入口函数中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::classify_responses::*;
        pub use internal::webdav::functions::get_folder_raw_data::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_file::*;
    }
}

pub mod browse {
    use crate::internal;
    // 结构体模型
    pub use internal::browse::structs::*;
    // 映射与前缀剥离（以 lib 为中心，此处统一导出）
    pub use internal::browse::functions::map_responses::map_responses;
    pub use internal::browse::functions::strip_base_prefix::strip_base_prefix;
}

pub mod remote_file {
    use crate::internal;
    pub use internal::remote_file::structs::remote_file_data::*;
}
