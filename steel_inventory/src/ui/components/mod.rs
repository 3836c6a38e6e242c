mod notice_window;

pub use notice_window::NoticeWindow;
