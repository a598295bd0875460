#[cfg(windows)]
use vdmanager::{ComApartment, VirtualDesktopManager, HWND};
#[cfg(windows)]
use windows::Win32::{
    System::Console::GetConsoleWindow, UI::WindowsAndMessaging::GetForegroundWindow,
};

#[cfg(windows)]
fn report(manager: &VirtualDesktopManager, name: &str, hwnd: HWND) {
    match manager.get_window_desktop_id(hwnd) {
        Ok(id) => println!("{} {:?} is on desktop {}", name, hwnd, id),
        Err(er) => println!("{} {:?} desktop lookup failed: {} ({})", name, hwnd, er, er.hresult()),
    }
    match manager.is_window_on_current_desktop(hwnd) {
        Ok(on_current) => println!("{} {:?} on current desktop: {}", name, hwnd, on_current),
        Err(er) => println!("{} {:?} current desktop check failed: {}", name, hwnd, er),
    }
}

#[cfg(windows)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let apartment = ComApartment::sta().unwrap();
    let manager = VirtualDesktopManager::new(&apartment).unwrap();

    report(&manager, "Console", unsafe { GetConsoleWindow() });
    report(&manager, "Foreground", unsafe { GetForegroundWindow() });

    println!("Switch to another desktop and press enter...");
    std::io::stdin().read_line(&mut String::new()).unwrap();

    report(&manager, "Console", unsafe { GetConsoleWindow() });
    log::info!("Done");
}

#[cfg(not(windows))]
fn main() {
    env_logger::init();
    log::error!("Virtual desktops are only available on Windows");
}
