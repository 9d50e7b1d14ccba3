//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuAward as Award, LuCalendar as Calendar, LuCheck as Check,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuHeart as Heart,
        LuImage as Image, LuLeaf as Leaf, LuMail as Mail, LuMapPin as Location, LuMenu as Menu,
        LuPlus as Plus, LuRecycle as Recycle, LuSearch as Search, LuSprout as Sprout,
        LuTrophy as Trophy, LuUser as User, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsAward as Award, BsCalendarEvent as Calendar,
        BsCheckLg as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsEnvelope as Mail, BsGeoAltFill as Location, BsHeart as Heart, BsImage as Image,
        BsList as Menu, BsPeople as Users, BsPerson as User, BsPlusLg as Plus,
        BsRecycle as Recycle, BsSearch as Search, BsTree as Leaf, BsTreeFill as Sprout,
        BsTrophy as Trophy, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(AWARD, Award);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(HEART, Heart);
themed_icon!(IMAGE, Image);
themed_icon!(LEAF, Leaf);
themed_icon!(LOCATION, Location);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(PLUS, Plus);
themed_icon!(RECYCLE, Recycle);
themed_icon!(SEARCH, Search);
themed_icon!(SPROUT, Sprout);
themed_icon!(TROPHY, Trophy);
themed_icon!(USER, User);
themed_icon!(USERS, Users);
