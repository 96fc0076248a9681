/*
 *  weather_glyph.rs
 *
 *  WeatherStar - local on the 8s
 *	(c) 2020-26 Stuart Hunter
 *
 *	Sun, cloud and forecast-dot icons built from filled circles
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */

use core::f32::consts::FRAC_PI_4;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Rays start this far past the sun's rim...
pub const RAY_GAP: i32 = 3;
/// ...and stop short of this distance past it.
pub const RAY_REACH: i32 = 10;
pub const RAY_COUNT: i32 = 8;

/// Cloud lobes as (dx, dy, radius) from the cloud centre.
pub const CLOUD_LOBES: [(i32, i32, i32); 3] = [
    (0, 0, 12),   // centre
    (-10, 4, 10), // left-bottom
    (10, 4, 10),  // right-bottom
];

pub const FORECAST_DOT_RADIUS: i32 = 3;

/// Brute-force disc: every (dx, dy) in the bounding box with
/// dx² + dy² <= r². Only meant for icon-sized radii.
pub fn filled_circle<D>(
    target: &mut D,
    cx: i32,
    cy: i32,
    r: i32,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if r < 0 {
        return Ok(());
    }
    let r_sq = r as i64 * r as i64;
    let pixels = (-r..=r).flat_map(move |dy| {
        (-r..=r)
            .filter(move |&dx| (dx as i64).pow(2) + (dy as i64).pow(2) <= r_sq)
            .map(move |dx| Pixel(Point::new(cx.saturating_add(dx), cy.saturating_add(dy)), color))
    });
    target.draw_iter(pixels)
}

/// Sun body plus eight two-pixel-wide rays at 45° steps.
pub fn sun<D>(
    target: &mut D,
    cx: i32,
    cy: i32,
    r: i32,
    body: Rgb888,
    rays: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    filled_circle(target, cx, cy, r, body)?;

    let mut ray_pixels = Vec::with_capacity((RAY_COUNT * (RAY_REACH - RAY_GAP) * 2) as usize);
    for i in 0..RAY_COUNT {
        let angle = i as f32 * FRAC_PI_4;
        let (sin, cos) = angle.sin_cos();
        for d in r.saturating_add(RAY_GAP)..r.saturating_add(RAY_REACH) {
            let px = cx.saturating_add((cos * d as f32) as i32);
            let py = cy.saturating_add((sin * d as f32) as i32);
            ray_pixels.push(Pixel(Point::new(px, py), rays));
            ray_pixels.push(Pixel(Point::new(px.saturating_add(1), py), rays));
        }
    }
    target.draw_iter(ray_pixels)
}

/// Three overlapping discs; later lobes paint over earlier ones.
pub fn cloud<D>(target: &mut D, cx: i32, cy: i32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for (ox, oy, r) in CLOUD_LOBES {
        filled_circle(target, cx.saturating_add(ox), cy.saturating_add(oy), r, color)?;
    }
    Ok(())
}

/// Small status dot used in the forecast boxes.
pub fn forecast_dot<D>(target: &mut D, cx: i32, cy: i32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    filled_circle(target, cx, cy, FORECAST_DOT_RADIUS, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::framebuffer::PixelSurface;

    const BG: Rgb888 = Rgb888::new(10, 10, 10);

    fn canvas(w: u32, h: u32) -> PixelSurface {
        let mut s = PixelSurface::new(w, h, BG, BG);
        s.clear();
        s
    }

    fn painted(s: &PixelSurface, c: Rgb888) -> usize {
        s.as_slice().iter().filter(|&&p| p == c).count()
    }

    #[test]
    fn test_filled_circle_inclusion() {
        let mut s = canvas(64, 64);
        filled_circle(&mut s, 20, 20, 5, Rgb888::GREEN).unwrap();
        assert_eq!(s.pixel(20, 20), Some(Rgb888::GREEN));
        assert_eq!(s.pixel(20, 25), Some(Rgb888::GREEN));
        assert_eq!(s.pixel(23, 24), Some(Rgb888::GREEN)); // 9 + 16 = 25
        assert_eq!(s.pixel(20, 26), Some(BG));
        assert_eq!(s.pixel(24, 24), Some(BG)); // 32 > 25
    }

    #[test]
    fn test_filled_circle_area() {
        let mut s = canvas(16, 16);
        filled_circle(&mut s, 8, 8, 3, Rgb888::RED).unwrap();
        // lattice points with x² + y² <= 9
        assert_eq!(painted(&s, Rgb888::RED), 29);
    }

    #[test]
    fn test_filled_circle_zero_radius_is_one_pixel() {
        let mut s = canvas(4, 4);
        filled_circle(&mut s, 1, 1, 0, Rgb888::RED).unwrap();
        assert_eq!(painted(&s, Rgb888::RED), 1);
    }

    #[test]
    fn test_filled_circle_clips() {
        let mut s = canvas(10, 10);
        filled_circle(&mut s, 0, 0, 4, Rgb888::RED).unwrap();
        assert_eq!(s.pixel(0, 0), Some(Rgb888::RED));
        assert_eq!(s.pixel(4, 0), Some(Rgb888::RED));
        assert_eq!(s.pixel(3, 3), Some(BG));
    }

    #[test]
    fn test_sun_rays() {
        let (body, rays) = (Rgb888::YELLOW, Rgb888::new(255, 160, 50));
        let mut s = canvas(80, 80);
        sun(&mut s, 40, 40, 10, body, rays).unwrap();
        assert_eq!(s.pixel(40, 40), Some(body));
        // east ray spans r+3 ..= r+9 with a right-hand neighbour
        assert_eq!(s.pixel(53, 40), Some(rays));
        assert_eq!(s.pixel(59, 40), Some(rays));
        assert_eq!(s.pixel(60, 40), Some(rays));
        assert_eq!(s.pixel(61, 40), Some(BG));
        assert_eq!(s.pixel(52, 40), Some(BG));
        // south ray
        assert_eq!(s.pixel(40, 53), Some(rays));
        assert_eq!(s.pixel(41, 53), Some(rays));
        // west ray
        assert_eq!(s.pixel(27, 40), Some(rays));
        // gap between body and ray start stays background
        assert_eq!(s.pixel(51, 40), Some(BG));
    }

    #[test]
    fn test_cloud_lobes_union() {
        let mut s = canvas(80, 60);
        cloud(&mut s, 40, 30, Rgb888::WHITE).unwrap();
        assert_eq!(s.pixel(40, 30), Some(Rgb888::WHITE));
        assert_eq!(s.pixel(40, 18), Some(Rgb888::WHITE)); // top of centre lobe
        assert_eq!(s.pixel(20, 34), Some(Rgb888::WHITE)); // left rim
        assert_eq!(s.pixel(60, 34), Some(Rgb888::WHITE)); // right rim
        assert_eq!(s.pixel(19, 34), Some(BG));
        assert_eq!(s.pixel(40, 17), Some(BG));
    }

    #[test]
    fn test_partly_cloudy_paint_order() {
        let mut s = canvas(200, 120);
        sun(&mut s, 90, 55, 18, Rgb888::YELLOW, Rgb888::RED).unwrap();
        cloud(&mut s, 110, 60, Rgb888::WHITE).unwrap();
        // overlap belongs to the cloud, the exposed sun stays yellow
        assert_eq!(s.pixel(100, 60), Some(Rgb888::WHITE));
        assert_eq!(s.pixel(80, 50), Some(Rgb888::YELLOW));
    }

    #[test]
    fn test_icons_near_coordinate_limits_clip() {
        let mut s = canvas(16, 16);
        filled_circle(&mut s, i32::MAX - 2, i32::MAX - 2, 5, Rgb888::RED).unwrap();
        filled_circle(&mut s, i32::MIN + 1, 3, 5, Rgb888::RED).unwrap();
        sun(&mut s, i32::MAX, i32::MIN, 18, Rgb888::RED, Rgb888::RED).unwrap();
        cloud(&mut s, i32::MAX - 5, i32::MAX - 3, Rgb888::RED).unwrap();
        forecast_dot(&mut s, i32::MIN, i32::MAX, Rgb888::RED).unwrap();
        assert_eq!(painted(&s, Rgb888::RED), 0);
    }

    #[test]
    fn test_forecast_dot() {
        let mut s = canvas(20, 20);
        forecast_dot(&mut s, 10, 10, Rgb888::CYAN).unwrap();
        assert_eq!(painted(&s, Rgb888::CYAN), 29);
    }
}
