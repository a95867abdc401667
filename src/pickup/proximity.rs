//! 距离 + 视锥判定，用来决定玩家是否“看着”某个可拾取物。

use bevy::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCheck {
    pub distance: f32,
    pub in_view: bool,
}

/// `max_angle_deg` 是视线与目标方向之间允许的最大夹角（角度制）
pub fn check_view(
    observer: Vec3,
    forward: Vec3,
    target: Vec3,
    max_distance: f32,
    max_angle_deg: f32,
) -> ViewCheck {
    let offset = target - observer;
    let distance = offset.length();
    if distance > max_distance {
        return ViewCheck {
            distance,
            in_view: false,
        };
    }

    // 与观察点重合时总是算在视野内
    let Some(direction) = offset.try_normalize() else {
        return ViewCheck {
            distance,
            in_view: true,
        };
    };
    let cos = forward.normalize_or_zero().dot(direction).clamp(-1.0, 1.0);
    let angle = cos.acos().to_degrees();

    ViewCheck {
        distance,
        in_view: angle <= max_angle_deg,
    }
}
