use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2};
use orbitcam::camera::{Camera, CameraController};
use orbitcam::input::{InputEvent, InputProcessor, MouseButton};
use orbitcam::math::tilt_angles;
use orbitcam::options::CameraOptions;
use orbitcam::CameraCommand;

fn tilt_benchmark(c: &mut Criterion) {
    let regular = Quat::from_euler(glam::EulerRot::XYZ, 0.3, 0.7, -1.1);
    let locked = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

    let mut group = c.benchmark_group("tilt_angles");
    group.bench_function("regular", |b| {
        b.iter(|| black_box(tilt_angles(black_box(regular))))
    });
    group.bench_function("gimbal_locked", |b| {
        b.iter(|| black_box(tilt_angles(black_box(locked))))
    });
    group.finish();
}

fn update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_update");

    group.bench_function("orbit_tick", |b| {
        b.iter_batched(
            || {
                let mut controller =
                    CameraController::new(Camera::default(), CameraOptions::default());
                controller.execute(CameraCommand::Rotate {
                    delta: Vec2::new(120.0, -40.0),
                });
                controller
            },
            |mut controller| {
                controller.update(black_box(1.0 / 60.0));
                controller
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("pan_tick", |b| {
        b.iter_batched(
            || {
                let mut controller =
                    CameraController::new(Camera::default(), CameraOptions::default());
                controller.execute(CameraCommand::Pan {
                    delta: Vec2::new(30.0, 12.0),
                });
                controller
            },
            |mut controller| {
                controller.update(black_box(1.0 / 60.0));
                controller
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn gesture_benchmark(c: &mut Criterion) {
    c.bench_function("drag_to_settled_orbit", |b| {
        b.iter(|| {
            let mut input = InputProcessor::new();
            let mut controller =
                CameraController::new(Camera::default(), CameraOptions::default());
            let _ = input.handle_event(InputEvent::Press {
                button: MouseButton::Right,
            });
            for _ in 0..10 {
                let drag = InputEvent::Drag {
                    button: MouseButton::Right,
                    delta: Vec2::new(8.0, 2.0),
                };
                if let Some(cmd) = input.handle_event(drag) {
                    controller.execute(cmd);
                }
            }
            while controller.is_active() {
                controller.update(1.0 / 60.0);
            }
            black_box(controller.tilt())
        })
    });
}

criterion_group!(benches, tilt_benchmark, update_benchmark, gesture_benchmark);
criterion_main!(benches);
