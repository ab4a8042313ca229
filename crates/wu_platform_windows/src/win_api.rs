use std::{ffi::OsStr, iter::once, os::windows::ffi::OsStrExt};

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::PCWSTR;

/// 设置窗口显示关联（截图/录屏可见性）
#[inline]
pub fn set_window_display_affinity(
    hwnd: HWND,
    affinity: WINDOW_DISPLAY_AFFINITY,
) -> windows::core::Result<()> {
    // SAFETY: 只传递句柄值，句柄是否有效由系统判断，失败时返回错误。
    unsafe { SetWindowDisplayAffinity(hwnd, affinity) }
}

/// 查询窗口当前的显示关联值
#[inline]
pub fn get_window_display_affinity(hwnd: HWND) -> windows::core::Result<u32> {
    let mut affinity = 0u32;
    // SAFETY: `affinity` 在调用期间有效，系统只写入一个 DWORD。
    unsafe { GetWindowDisplayAffinity(hwnd, &mut affinity)? };
    Ok(affinity)
}

unsafe extern "system" fn default_window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Create a hidden, top-level tool window owned by this process.
pub fn create_hidden_toolwindow(
    window_class_name: &str,
    width: i32,
    height: i32,
) -> windows::core::Result<HWND> {
    let instance = unsafe { GetModuleHandleW(None)? };
    let class_name = to_wide_chars(window_class_name);

    let window_class = WNDCLASSW {
        lpfnWndProc: Some(default_window_proc),
        hInstance: instance.into(),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        ..Default::default()
    };

    // Re-registering an existing class fails harmlessly; creation below still succeeds.
    unsafe { RegisterClassW(&window_class) };

    unsafe {
        CreateWindowExW(
            WS_EX_TOOLWINDOW,
            PCWSTR(class_name.as_ptr()),
            PCWSTR::null(),
            WS_POPUP,
            0,
            0,
            width,
            height,
            Some(HWND(std::ptr::null_mut())),
            Some(HMENU(std::ptr::null_mut())),
            Some(instance.into()),
            None,
        )
    }
}

#[inline]
pub fn destroy_window(hwnd: HWND) -> windows::core::Result<()> {
    unsafe { DestroyWindow(hwnd) }
}

pub fn to_wide_chars(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(once(0)).collect()
}
