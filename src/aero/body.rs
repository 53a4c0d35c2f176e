use bevy::log::warn;
use nalgebra::{UnitQuaternion, Vector3};

use super::components::MagnusLift;
use super::composer::{AeroLoads, ForceComposer};
use super::state::{validate_angle_of_attack, AeroAngles, FlowState, Stage};
use crate::coefficients::{
    reynolds_number, rotational_lift_coefficient, AeroCoefficients, DragCoefficients,
    LiftCoefficients, LiftInputs, RotationalDamping,
};
use crate::config::{AeroConfig, BodyDescription};
use crate::geometry::{
    assign_body_axes, AxisAssignment, EllipsoidBody, EllipsoidProperties, GroupMembership,
};
use crate::physics::{BodyKinematics, ForceSink};
use crate::transformations::{FrameChain, FrameId};
use crate::utils::{math::safe_normalize, AeroDiagnostic, AeroError};

/// An ellipsoidal body and everything derived from it in the current step.
///
/// The body owns its frame chain (earth, object, body, equivalent aerodynamic body)
/// and both ellipsoids. Derived quantities are overwritten by each stage, so a
/// stage called twice with the same inputs gives the same result.
#[derive(Debug)]
pub struct AeroBody {
    name: String,
    config: AeroConfig,
    scale: Vector3<f64>,
    camber: f64,
    dynamically_variable_shape: bool,
    group: Option<GroupMembership>,

    frames: FrameChain,
    axes: AxisAssignment,
    body: EllipsoidBody,
    eab: EllipsoidBody,
    properties: EllipsoidProperties,

    external_flow: Vector3<f64>,
    position: Vector3<f64>,
    flow: FlowState,
    angles: AeroAngles,
    angle_of_attack_axis: Vector3<f64>,
    lift_direction: Vector3<f64>,
    profile_area: f64,
    coefficients: AeroCoefficients,
    loads: AeroLoads,
    diagnostics: Vec<AeroDiagnostic>,

    composer: ForceComposer,
    stage: Stage,
}

impl AeroBody {
    /// Body with default settings and the standard set of components.
    pub fn new(scale: Vector3<f64>, config: AeroConfig) -> Result<Self, AeroError> {
        AeroBodyBuilder::new(scale).config(config).build()
    }

    pub fn builder(scale: Vector3<f64>) -> AeroBodyBuilder {
        AeroBodyBuilder::new(scale)
    }

    pub fn from_description(
        description: &BodyDescription,
        config: AeroConfig,
    ) -> Result<Self, AeroError> {
        let [x, y, z] = description.scale;
        AeroBodyBuilder::new(Vector3::new(x, y, z))
            .name(&description.name)
            .camber(description.camber)
            .dynamically_variable_shape(description.dynamically_variable_shape)
            .config(config)
            .build()
    }

    fn require(&self, requested: Stage) -> Result<(), AeroError> {
        let required = requested.prerequisite();
        if self.stage < required {
            return Err(AeroError::StageOutOfOrder {
                requested,
                required,
                completed: self.stage,
            });
        }
        Ok(())
    }

    /// Assign aerodynamic axes from the object scale and derive the ellipsoid properties.
    pub fn resolve_geometry(&mut self) -> Result<(), AeroError> {
        let axes = assign_body_axes(&self.scale)?;

        self.frames.set_rotation(FrameId::BODY, axes.rotation);
        self.body = EllipsoidBody::from_diameters(axes.span, axes.thickness, axes.chord, self.camber);
        self.eab = self.body;
        self.properties = EllipsoidProperties::compute(&self.body, self.area_scale());
        self.axes = axes;
        self.stage = Stage::Geometry;
        Ok(())
    }

    /// Propagate the wind from the earth frame down the frame chain.
    ///
    /// Without overrides the wind is the body's velocity relative to the ambient flow
    /// and the angular wind is the body's angular velocity. Overrides are earth-frame
    /// vectors used as given.
    pub fn resolve_wind(
        &mut self,
        kinematics: &BodyKinematics,
        wind_override: Option<Vector3<f64>>,
        angular_wind_override: Option<Vector3<f64>>,
    ) -> Result<(), AeroError> {
        self.require(Stage::Wind)?;

        self.position = kinematics.position;
        self.frames.set_rotation(FrameId::OBJECT, kinematics.orientation);

        let wind = wind_override.unwrap_or(kinematics.linear_velocity - self.external_flow);
        let angular_wind = angular_wind_override.unwrap_or(kinematics.angular_velocity);
        self.frames.resolve_wind(&wind, &angular_wind);

        let airspeed = self.frames.frame(FrameId::BODY).wind_velocity().norm();
        let dynamic_pressure = 0.5 * self.config.fluid.density * airspeed * airspeed;
        self.flow = FlowState {
            dynamic_pressure,
            qs: dynamic_pressure * self.properties.planform_area,
            airspeed,
        };
        self.stage = Stage::Wind;
        Ok(())
    }

    /// Sideslip, the equivalent aerodynamic body frame and angle of attack.
    ///
    /// Fails when |α| exceeds 90°, leaving the body at the wind stage so no
    /// coefficients or forces can be computed from the invalid state.
    pub fn resolve_angles(&mut self) -> Result<(), AeroError> {
        self.require(Stage::Angles)?;
        self.stage = Stage::Wind;

        let body_wind = *self.frames.frame(FrameId::BODY).wind_velocity();
        let beta = body_wind.x.atan2(body_wind.z);

        self.frames.set_rotation(
            FrameId::EAB,
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), beta),
        );
        self.frames.resolve_wind_from(FrameId::EAB);

        // Positive α for a downward wind component
        let eab_wind = self.frames.frame(FrameId::EAB).wind_velocity();
        let alpha = -eab_wind.y.atan2(eab_wind.z);
        validate_angle_of_attack(alpha)?;

        let wind_direction = *self.frames.frame(FrameId::BODY).wind_direction();
        self.angles = AeroAngles::new(alpha, beta);
        self.angle_of_attack_axis = wind_direction.cross(&Vector3::new(0.0, -1.0, 0.0));
        self.lift_direction = safe_normalize(&wind_direction.cross(&self.angle_of_attack_axis));
        self.stage = Stage::Angles;
        Ok(())
    }

    /// Project the body into the wind so the lift model sees zero sideslip.
    pub fn resolve_eab(&mut self) -> Result<(), AeroError> {
        self.require(Stage::Eab)?;

        self.eab = self
            .body
            .equivalent_aerodynamic_body(self.angles.sin_beta, self.angles.cos_beta);
        self.profile_area = self
            .properties
            .profile_area(self.frames.frame(FrameId::BODY).wind_direction());
        self.stage = Stage::Eab;
        Ok(())
    }

    pub fn compute_coefficients(&mut self) -> Result<(), AeroError> {
        self.require(Stage::Coefficients)?;

        let lift_inputs = LiftInputs {
            aspect_ratio: self.lifting_aspect_ratio(),
            thickness_to_chord: self.eab.thickness_to_chord(),
            camber_ratio: self.eab.camber_ratio(),
            mid_axis: self.eab.mid_axis(),
            alpha: self.angles.alpha,
            cos_alpha: self.angles.cos_alpha,
            cos_2alpha: self.angles.cos_2alpha,
        };
        let lift = LiftCoefficients::compute(&lift_inputs, &self.config.lift);

        let reynolds = reynolds_number(self.flow.airspeed, self.eab.chord(), &self.config.fluid);
        let drag = DragCoefficients::compute(
            reynolds,
            self.eab.thickness_to_chord(),
            self.angles.sin_alpha,
            lift.cd_induced,
            &self.config.drag,
        );

        let body_frame = self.frames.frame(FrameId::BODY);
        let damping = RotationalDamping::compute(
            body_frame.angular_wind_velocity(),
            &self.body,
            &self.properties,
            &self.config.fluid,
            &self.config.drag,
        );
        let rotational_lift = rotational_lift_coefficient(
            body_frame.wind_velocity(),
            body_frame.angular_wind_velocity(),
            &self.properties.volume_vector,
            self.properties.planform_area,
            &self.config.magnus,
        );

        self.coefficients = AeroCoefficients {
            lift,
            drag,
            damping,
            rotational_lift,
        };
        self.stage = Stage::Coefficients;
        Ok(())
    }

    /// Evaluate every attached component and sum their loads.
    pub fn compute_forces(&mut self) -> Result<&AeroLoads, AeroError> {
        self.require(Stage::Forces)?;

        let mut composer = std::mem::take(&mut self.composer);
        let (loads, diagnostics) = composer.compose(self);
        self.composer = composer;

        for diagnostic in &diagnostics {
            warn!("Aero body '{}': {}", self.name, diagnostic);
        }
        self.loads = loads;
        self.diagnostics = diagnostics;
        self.stage = Stage::Forces;
        Ok(&self.loads)
    }

    /// Run every stage for one simulation tick.
    pub fn step_all(&mut self, kinematics: &BodyKinematics) -> Result<&AeroLoads, AeroError> {
        self.run_stages(kinematics, None, None)
    }

    /// Run every stage with an explicitly supplied earth-frame wind and angular wind.
    pub fn step_with_wind(
        &mut self,
        kinematics: &BodyKinematics,
        wind: Vector3<f64>,
        angular_wind: Vector3<f64>,
    ) -> Result<&AeroLoads, AeroError> {
        self.run_stages(kinematics, Some(wind), Some(angular_wind))
    }

    fn run_stages(
        &mut self,
        kinematics: &BodyKinematics,
        wind_override: Option<Vector3<f64>>,
        angular_wind_override: Option<Vector3<f64>>,
    ) -> Result<&AeroLoads, AeroError> {
        if self.dynamically_variable_shape || self.stage < Stage::Geometry {
            self.resolve_geometry()?;
        }
        self.resolve_wind(kinematics, wind_override, angular_wind_override)?;
        self.resolve_angles()?;
        self.resolve_eab()?;
        self.compute_coefficients()?;
        self.compute_forces()
    }

    /// Bench entry point: hold the body still in a unit-speed flow at angle of attack `alpha`.
    ///
    /// The wind is chosen so the body-frame wind is `(0, -sin α, cos α)` for the current
    /// orientation and passed as an override, so the external flow is left as it was.
    /// Wind, angles and the equivalent body are resolved; coefficients and forces are
    /// left to the caller.
    pub fn set_angle_of_attack(&mut self, alpha: f64) -> Result<(), AeroError> {
        validate_angle_of_attack(alpha)?;
        self.require(Stage::Wind)?;

        let body_wind = Vector3::new(0.0, -alpha.sin(), alpha.cos());
        let earth_wind = self.frames.transform(FrameId::BODY, FrameId::EARTH, &body_wind);

        let kinematics =
            BodyKinematics::new(self.position, *self.frames.frame(FrameId::OBJECT).rotation());
        self.resolve_wind(&kinematics, Some(earth_wind), Some(Vector3::zeros()))?;
        self.resolve_angles()?;
        self.resolve_eab()
    }

    /// Hand the summed force and torque to the sink.
    pub fn apply_loads<S: ForceSink>(&self, sink: &mut S) {
        sink.apply_force(self.loads.force_earth);
        sink.apply_torque(self.loads.moment_earth);
    }

    /// Hand each component's force to the sink at its own point of action.
    ///
    /// The torque passed alongside removes the moment that the offset point already
    /// produces, so the net load about the body position matches [`AeroBody::apply_loads`].
    pub fn apply_loads_at_points<S: ForceSink>(&self, sink: &mut S) {
        for contribution in &self.loads.contributions {
            let arm = contribution.point_of_action - self.position;
            sink.apply_force_at_point(contribution.force_earth, contribution.point_of_action);
            sink.apply_torque(contribution.moment_earth - arm.cross(&contribution.force_earth));
        }
    }

    /// Takes effect at the next geometry resolution.
    pub fn set_scale(&mut self, scale: Vector3<f64>) {
        self.scale = scale;
    }

    pub fn set_camber(&mut self, camber: f64) {
        self.camber = camber;
        self.body.set_aerodynamic_ratios(camber);
        self.eab.set_aerodynamic_ratios(camber);
    }

    pub fn set_external_flow(&mut self, flow: Vector3<f64>) {
        self.external_flow = flow;
    }

    /// Replace the model constants. Toggling Magnus lift adds or removes the `magnus` component.
    pub fn set_config(&mut self, config: AeroConfig) {
        if config.magnus.enabled && self.composer.get("magnus").is_none() {
            self.composer.push(MagnusLift::default());
        } else if !config.magnus.enabled && self.config.magnus.enabled {
            self.composer.remove("magnus");
        }
        self.config = config;
    }

    /// Join or leave a group; planform area is rescaled immediately.
    pub fn set_group(&mut self, group: Option<GroupMembership>) -> Result<(), AeroError> {
        self.group = group;
        self.resolve_geometry()
    }

    pub fn composer(&self) -> &ForceComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ForceComposer {
        &mut self.composer
    }

    fn area_scale(&self) -> f64 {
        self.group.map_or(1.0, |g| g.area_scale)
    }

    /// Aspect ratio used by the lift model: the group's when it sets one, else the EAB's.
    pub fn lifting_aspect_ratio(&self) -> f64 {
        self.group
            .and_then(|g| g.aspect_ratio)
            .unwrap_or_else(|| self.eab.aspect_ratio())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AeroConfig {
        &self.config
    }

    pub fn scale(&self) -> &Vector3<f64> {
        &self.scale
    }

    pub fn is_dynamically_variable_shape(&self) -> bool {
        self.dynamically_variable_shape
    }

    pub fn group(&self) -> Option<&GroupMembership> {
        self.group.as_ref()
    }

    pub fn frames(&self) -> &FrameChain {
        &self.frames
    }

    pub fn axes(&self) -> &AxisAssignment {
        &self.axes
    }

    pub fn body(&self) -> &EllipsoidBody {
        &self.body
    }

    pub fn eab(&self) -> &EllipsoidBody {
        &self.eab
    }

    pub fn properties(&self) -> &EllipsoidProperties {
        &self.properties
    }

    pub fn external_flow(&self) -> &Vector3<f64> {
        &self.external_flow
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn dynamic_pressure(&self) -> f64 {
        self.flow.dynamic_pressure
    }

    pub fn qs(&self) -> f64 {
        self.flow.qs
    }

    pub fn angles(&self) -> &AeroAngles {
        &self.angles
    }

    pub fn angle_of_attack_axis(&self) -> &Vector3<f64> {
        &self.angle_of_attack_axis
    }

    /// Body-frame unit vector normal to the wind in the plane of the angle of attack.
    pub fn lift_direction(&self) -> &Vector3<f64> {
        &self.lift_direction
    }

    pub fn profile_area(&self) -> f64 {
        self.profile_area
    }

    pub fn coefficients(&self) -> &AeroCoefficients {
        &self.coefficients
    }

    pub fn loads(&self) -> &AeroLoads {
        &self.loads
    }

    pub fn diagnostics(&self) -> &[AeroDiagnostic] {
        &self.diagnostics
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Body-frame wind velocity, the input to every coefficient.
    pub fn body_wind(&self) -> &Vector3<f64> {
        self.frames.frame(FrameId::BODY).wind_velocity()
    }

    pub fn body_wind_direction(&self) -> &Vector3<f64> {
        self.frames.frame(FrameId::BODY).wind_direction()
    }

    pub fn body_angular_wind(&self) -> &Vector3<f64> {
        self.frames.frame(FrameId::BODY).angular_wind_velocity()
    }
}

/// Builder for [`AeroBody`].
#[derive(Debug)]
pub struct AeroBodyBuilder {
    name: String,
    scale: Vector3<f64>,
    camber: f64,
    dynamically_variable_shape: bool,
    config: AeroConfig,
    group: Option<GroupMembership>,
    composer: Option<ForceComposer>,
    kinematics: BodyKinematics,
}

impl AeroBodyBuilder {
    pub fn new(scale: Vector3<f64>) -> Self {
        Self {
            name: "aero_body".to_string(),
            scale,
            camber: 0.0,
            dynamically_variable_shape: false,
            config: AeroConfig::default(),
            group: None,
            composer: None,
            kinematics: BodyKinematics::default(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn camber(mut self, camber: f64) -> Self {
        self.camber = camber;
        self
    }

    pub fn dynamically_variable_shape(mut self, dynamic: bool) -> Self {
        self.dynamically_variable_shape = dynamic;
        self
    }

    /// Overridden by the `AeroConfig` resource once the body is stepped by `aero_body_system`.
    pub fn config(mut self, config: AeroConfig) -> Self {
        self.config = config;
        self
    }

    pub fn group(mut self, group: GroupMembership) -> Self {
        self.group = Some(group);
        self
    }

    /// Replace the standard components.
    pub fn composer(mut self, composer: ForceComposer) -> Self {
        self.composer = Some(composer);
        self
    }

    /// Initial position and orientation, used by bench calls before the first step.
    pub fn kinematics(mut self, kinematics: BodyKinematics) -> Self {
        self.kinematics = kinematics;
        self
    }

    pub fn build(self) -> Result<AeroBody, AeroError> {
        let composer = self
            .composer
            .unwrap_or_else(|| ForceComposer::standard(&self.config));

        let mut frames = FrameChain::aerodynamic();
        frames.set_rotation(FrameId::OBJECT, self.kinematics.orientation);

        let mut body = AeroBody {
            name: self.name,
            config: self.config,
            scale: self.scale,
            camber: self.camber,
            dynamically_variable_shape: self.dynamically_variable_shape,
            group: self.group,
            frames,
            axes: assign_body_axes(&self.scale)?,
            body: EllipsoidBody::default(),
            eab: EllipsoidBody::default(),
            properties: EllipsoidProperties::compute(&EllipsoidBody::default(), 1.0),
            external_flow: Vector3::zeros(),
            position: self.kinematics.position,
            flow: FlowState::default(),
            angles: AeroAngles::default(),
            angle_of_attack_axis: Vector3::zeros(),
            lift_direction: Vector3::zeros(),
            profile_area: 0.0,
            coefficients: AeroCoefficients::default(),
            loads: AeroLoads::default(),
            diagnostics: Vec::new(),
            composer,
            stage: Stage::Created,
        };
        body.resolve_geometry()?;
        Ok(body)
    }
}
